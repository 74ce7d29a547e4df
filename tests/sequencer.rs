use aikiosk::nav::Step;

#[test]
fn journey_has_ten_steps_in_order() {
    assert_eq!(Step::total(), 10);
    assert_eq!(
        Step::ORDER,
        [
            Step::Welcome,
            Step::Info,
            Step::NameEntry,
            Step::DemoChat,
            Step::DemoVision,
            Step::DemoSpeechToText,
            Step::DemoTextToSpeech,
            Step::Quiz,
            Step::Results,
            Step::Certificate,
        ]
    );
}

#[test]
fn positions_are_one_based() {
    assert_eq!(Step::Welcome.position(), 1);
    assert_eq!(Step::NameEntry.position(), 3);
    assert_eq!(Step::Certificate.position(), 10);
}

#[test]
fn progress_percent_rounds_position_over_total() {
    assert_eq!(Step::Welcome.progress_percent(), 10);
    assert_eq!(Step::NameEntry.progress_percent(), 30);
    assert_eq!(Step::Quiz.progress_percent(), 80);
    assert_eq!(Step::Certificate.progress_percent(), 100);
}

#[test]
fn can_go_back_false_only_at_first_step() {
    for step in Step::ORDER {
        assert_eq!(step.can_go_back(), step.position() > 1, "{step:?}");
    }
}

#[test]
fn can_go_forward_false_only_at_last_step() {
    for step in Step::ORDER {
        assert_eq!(
            step.can_go_forward(),
            step.position() < Step::total(),
            "{step:?}"
        );
    }
}

#[test]
fn next_walks_the_whole_journey() {
    let mut step = Step::home();
    let mut visited = vec![step];
    while step.can_go_forward() {
        step = step.next();
        visited.push(step);
    }
    assert_eq!(visited, Step::ORDER.to_vec());
}

#[test]
fn previous_walks_back_without_wrapping() {
    let mut step = Step::Certificate;
    for _ in 0..20 {
        step = step.previous();
    }
    assert_eq!(step, Step::Welcome);
}

#[test]
fn boundary_steps_return_themselves() {
    assert_eq!(Step::Welcome.previous(), Step::Welcome);
    assert_eq!(Step::Certificate.next(), Step::Certificate);
}

#[test]
fn adjacent_steps_are_symmetric() {
    for step in Step::ORDER {
        if step.can_go_forward() {
            assert_eq!(step.next().previous(), step);
        }
    }
}

#[test]
fn home_always_returns_the_first_step() {
    assert_eq!(Step::home(), Step::Welcome);
    assert_eq!(Step::home().position(), 1);
}

#[test]
fn sequencing_is_pure() {
    // Same query, same answer: the sequencer keeps no memory of prior calls.
    let step = Step::DemoVision;
    let first = (step.position(), step.progress_percent(), step.next());
    let _ = step.next().next();
    let second = (step.position(), step.progress_percent(), step.next());
    assert_eq!(first, second);
}
