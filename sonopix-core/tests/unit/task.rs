use super::*;

#[test]
fn spawned_call_returns_its_value() {
    let task = spawn(|| 2 + 2);
    assert_eq!(task.join().unwrap(), 4);
}

#[test]
fn codec_call_runs_off_thread() {
    let payload = vec![0x5A; 10_000];
    let task = spawn(move || {
        let grid = crate::container::pack::encode_payload("off.wav", &payload)?;
        crate::container::pack::decode_payload(&grid)
    });
    let (name, decoded) = task.join().unwrap().unwrap();
    assert_eq!(name, "off.wav");
    assert_eq!(decoded.len(), 10_000);
}

#[test]
fn panic_in_worker_becomes_an_error() {
    let task = spawn(|| -> u32 { panic!("boom") });
    assert!(task.join().is_err());
}
