use super::*;

#[test]
fn starts_on_first_stage() {
    let p = Progress::default();
    assert_eq!(p.step(), 0);
    assert_eq!(p.caption(), STAGES[0]);
}

#[test]
fn advances_one_stage_per_tick() {
    let mut p = Progress::default();
    for expected in 1..STAGES.len() {
        p = p.advanced();
        assert_eq!(p.step(), expected);
        assert_eq!(p.caption(), STAGES[expected]);
    }
}

#[test]
fn holds_on_final_stage() {
    let mut p = Progress::default();
    for _ in 0..STAGES.len() * 3 {
        p = p.advanced();
    }
    assert_eq!(p.step(), STAGES.len() - 1);
    assert_eq!(p.caption(), STAGES[STAGES.len() - 1]);
}
