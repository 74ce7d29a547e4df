//! The fixed linear journey through the kiosk.

/// One stage of the guided tour, in walk-through order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Welcome,
    Info,
    NameEntry,
    DemoChat,
    DemoVision,
    DemoSpeechToText,
    DemoTextToSpeech,
    Quiz,
    Results,
    Certificate,
}

impl Step {
    /// The journey, in order. Navigation, progress, and gating are all
    /// derived from a step's place in this list.
    pub const ORDER: [Step; 10] = [
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
    ];

    /// The first step of the journey.
    pub fn home() -> Step {
        Step::ORDER[0]
    }

    pub fn total() -> usize {
        Step::ORDER.len()
    }

    fn index(self) -> usize {
        match self {
            Step::Welcome => 0,
            Step::Info => 1,
            Step::NameEntry => 2,
            Step::DemoChat => 3,
            Step::DemoVision => 4,
            Step::DemoSpeechToText => 5,
            Step::DemoTextToSpeech => 6,
            Step::Quiz => 7,
            Step::Results => 8,
            Step::Certificate => 9,
        }
    }

    /// 1-based place in the journey.
    pub fn position(self) -> usize {
        self.index() + 1
    }

    /// Rounded percentage of the journey covered once this step is reached.
    pub fn progress_percent(self) -> u8 {
        let ratio = self.position() as f64 / Step::total() as f64;
        (ratio * 100.0).round() as u8
    }

    pub fn can_go_back(self) -> bool {
        self.position() > 1
    }

    pub fn can_go_forward(self) -> bool {
        self.position() < Step::total()
    }

    /// The step before this one, or self at the start (no wraparound).
    pub fn previous(self) -> Step {
        if self.can_go_back() {
            Step::ORDER[self.index() - 1]
        } else {
            self
        }
    }

    /// The step after this one, or self at the end (no wraparound).
    pub fn next(self) -> Step {
        if self.can_go_forward() {
            Step::ORDER[self.index() + 1]
        } else {
            self
        }
    }

    /// Short label for the progress header.
    pub fn title(self) -> &'static str {
        match self {
            Step::Welcome => "Welcome",
            Step::Info => "About AI",
            Step::NameEntry => "Your Name",
            Step::DemoChat => "Chat Demo",
            Step::DemoVision => "Vision Demo",
            Step::DemoSpeechToText => "Speech-to-Text Demo",
            Step::DemoTextToSpeech => "Text-to-Speech Demo",
            Step::Quiz => "Quiz",
            Step::Results => "Results",
            Step::Certificate => "Certificate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_has_no_duplicates() {
        for (i, step) in Step::ORDER.iter().enumerate() {
            assert_eq!(step.position(), i + 1);
        }
    }

    #[test]
    fn home_is_welcome() {
        assert_eq!(Step::home(), Step::Welcome);
    }

    #[test]
    fn progress_endpoints() {
        assert_eq!(Step::Welcome.progress_percent(), 10);
        assert_eq!(Step::Certificate.progress_percent(), 100);
    }

    #[test]
    fn boundaries_do_not_wrap() {
        assert_eq!(Step::Welcome.previous(), Step::Welcome);
        assert_eq!(Step::Certificate.next(), Step::Certificate);
    }
}
