//! The built-in question bank.

/// Number of questions in one quiz attempt.
pub const QUESTION_COUNT: usize = 10;

/// One multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    /// Index into `options` of the correct answer.
    pub correct: usize,
    /// Shown on the results screen next to the visitor's answer.
    pub explanation: &'static str,
}

/// The fixed bank used for every attempt.
pub fn question_bank() -> &'static [Question; QUESTION_COUNT] {
    &BANK
}

static BANK: [Question; QUESTION_COUNT] = [
    Question {
        prompt: "What does AI stand for in a technology context?",
        options: [
            "Automated Intelligence",
            "Artificial Intelligence",
            "Advanced Integration",
            "Algorithmic Interface",
        ],
        correct: 1,
        explanation: "AI stands for Artificial Intelligence.",
    },
    Question {
        prompt: "Which kind of AI model is best suited to understanding and generating text?",
        options: [
            "Convolutional Neural Network (CNN)",
            "Large Language Model (LLM)",
            "Recurrent Neural Network (RNN)",
            "Support Vector Machine (SVM)",
        ],
        correct: 1,
        explanation: "Large Language Models are built specifically to process and produce human language.",
    },
    Question {
        prompt: "Which AI technology converts spoken audio into text?",
        options: [
            "Text-to-Speech (TTS)",
            "Natural Language Processing (NLP)",
            "Speech-to-Text (STT)",
            "Computer Vision",
        ],
        correct: 2,
        explanation: "Speech-to-Text systems such as Whisper turn voice recordings into text.",
    },
    Question {
        prompt: "What is the main capability of a Vision Language Model (VLM)?",
        options: [
            "Generating music from text",
            "Understanding and describing visual content",
            "Translating between languages only",
            "Optimizing program code",
        ],
        correct: 1,
        explanation: "A VLM can look at an image and describe or answer questions about what it shows.",
    },
    Question {
        prompt: "Machine Learning is a subset of:",
        options: [
            "Data Science",
            "Artificial Intelligence",
            "Computer Graphics",
            "Database Management",
        ],
        correct: 1,
        explanation: "Machine Learning is one branch of the broader field of Artificial Intelligence.",
    },
    Question {
        prompt: "What is the main difference between classical AI and Deep Learning?",
        options: [
            "Deep Learning uses layered neural networks",
            "Classical AI is always faster",
            "Deep Learning only works on images",
            "There is no meaningful difference",
        ],
        correct: 0,
        explanation: "Deep Learning stacks many hidden neural-network layers to learn complex patterns.",
    },
    Question {
        prompt: "Which AI technology is best suited to recognizing faces in a photo?",
        options: [
            "Natural Language Processing",
            "Computer Vision",
            "Speech Recognition",
            "Expert Systems",
        ],
        correct: 1,
        explanation: "Computer Vision lets machines understand and analyze visual content.",
    },
    Question {
        prompt: "What is meant by 'training data' in the context of AI?",
        options: [
            "Data used to benchmark a finished model",
            "Data used to teach an AI model",
            "Data that is corrupted or incomplete",
            "Data stored in the cloud",
        ],
        correct: 1,
        explanation: "Training data is the dataset a model learns from so it can make predictions.",
    },
    Question {
        prompt: "Which of the following is NOT a common everyday application of AI?",
        options: [
            "Streaming service recommendations",
            "Voice assistants such as Siri",
            "GPS navigation",
            "A basic pocket calculator",
        ],
        correct: 3,
        explanation: "A basic calculator runs simple fixed arithmetic, not AI; the others rely on it.",
    },
    Question {
        prompt: "What is a central ethical challenge in building AI systems?",
        options: [
            "High development cost",
            "Bias and fairness in automated decisions",
            "Slow processing speed",
            "Large file sizes",
        ],
        correct: 1,
        explanation: "Models trained on biased data can make unfair decisions, which makes bias a key ethical concern.",
    },
];
