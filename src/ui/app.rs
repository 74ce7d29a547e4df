//! Application shell: owns the session store, the current step, and the
//! transient per-screen input state.
//!
//! Every state change funnels through [`App::dispatch`] on the UI thread.
//! Backend requests are spawned onto the async runtime and re-enter the
//! loop as [`AppEvent`]s, so the store never observes concurrency.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::process::Command;
use tokio::runtime::Handle;
use uuid::Uuid;

use crate::api::types::ChatTurn;
use crate::api::ApiClient;
use crate::cert::Certificate;
use crate::config::Config;
use crate::nav::Step;
use crate::quiz::{self, question_bank, QuizTimer, QUESTION_COUNT};
use crate::session::{
    AudioClip, ChatMessage, ChatRole, SessionIntent, SessionState, SessionStore,
    TranscriptionRecord, VisionMessage,
};
use crate::ui::events::AppEvent;

/// Shown instead of a chat reply when the backend cannot be reached.
const CHAT_FALLBACK: &str =
    "Sorry, I could not reach the AI model. Please make sure the backend is running and try again.";
/// Shown instead of an image analysis when the backend cannot be reached.
const VISION_FALLBACK: &str =
    "Sorry, the image could not be analyzed. Please check the backend connection and try again.";
/// Appended to the transcription history when a request fails.
const TRANSCRIPTION_FALLBACK: &str =
    "Transcription failed. Please check the backend connection and try again.";
/// Used when no prompt is entered for an image.
const DEFAULT_VISION_PROMPT: &str = "Describe this image in detail";

/// Starter questions offered on an empty chat screen.
pub const SUGGESTED_PROMPTS: [&str; 4] = [
    "What is artificial intelligence?",
    "How can AI help in everyday life?",
    "Tell me about the future of AI technology",
    "What is the difference between AI and machine learning?",
];

/// Outcome of the startup health probe.
pub enum BackendStatus {
    Probing,
    Online(String),
    Offline(String),
}

/// Which input field the vision screen is editing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum VisionField {
    Path,
    Prompt,
}

/// A running external recorder and the file it is writing.
struct CaptureSession {
    child: tokio::process::Child,
    path: PathBuf,
}

pub struct App {
    config: Config,
    client: ApiClient,
    events: Sender<AppEvent>,
    runtime: Handle,
    store: SessionStore,
    step: Step,
    should_quit: bool,
    backend_status: BackendStatus,
    /// Transient one-line notice shown above the footer.
    notice: Option<String>,

    name_input: String,
    chat_input: String,
    suggestion_index: usize,
    vision_path: String,
    vision_prompt: String,
    vision_focus: VisionField,
    transcribe_path: String,
    speak_input: String,

    quiz_timer: Option<QuizTimer>,
    capture: Option<CaptureSession>,
    certificate: Option<Certificate>,
    certificate_file: Option<PathBuf>,
}

impl App {
    pub fn new(config: Config, client: ApiClient, events: Sender<AppEvent>, runtime: Handle) -> Self {
        let mut app = Self {
            config,
            client,
            events,
            runtime,
            store: SessionStore::new(),
            step: Step::home(),
            should_quit: false,
            backend_status: BackendStatus::Probing,
            notice: None,
            name_input: String::new(),
            chat_input: String::new(),
            suggestion_index: 0,
            vision_path: String::new(),
            vision_prompt: String::new(),
            vision_focus: VisionField::Path,
            transcribe_path: String::new(),
            speak_input: String::new(),
            quiz_timer: None,
            capture: None,
            certificate: None,
            certificate_file: None,
        };
        app.dispatch(SessionIntent::UpdateProgress(Step::home().progress_percent()));
        app
    }

    pub fn state(&self) -> &SessionState {
        self.store.state()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn backend_status(&self) -> &BackendStatus {
        &self.backend_status
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn chat_input(&self) -> &str {
        &self.chat_input
    }

    pub fn vision_path(&self) -> &str {
        &self.vision_path
    }

    pub fn vision_prompt(&self) -> &str {
        &self.vision_prompt
    }

    pub fn vision_focus(&self) -> VisionField {
        self.vision_focus
    }

    pub fn transcribe_path(&self) -> &str {
        &self.transcribe_path
    }

    pub fn speak_input(&self) -> &str {
        &self.speak_input
    }

    pub fn quiz_remaining(&self) -> Option<Duration> {
        self.quiz_timer.as_ref().map(QuizTimer::remaining)
    }

    pub fn certificate(&self) -> Option<&Certificate> {
        self.certificate.as_ref()
    }

    pub fn certificate_file(&self) -> Option<&PathBuf> {
        self.certificate_file.as_ref()
    }

    fn dispatch(&mut self, intent: SessionIntent) {
        self.store.dispatch(intent);
    }

    /// Fire the startup health probe; the result arrives as an event.
    pub fn probe_backend(&self) {
        let client = self.client.clone();
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let outcome = client
                .health()
                .await
                .map(|reply| reply.status)
                .map_err(|err| err.to_string());
            let _ = events.send(AppEvent::HealthProbe(outcome));
        });
    }

    // ------------------------------------------------------------------
    // Navigation

    /// Move to `target`, applying the journey's gating rules.
    fn go_to(&mut self, target: Step) {
        // Results are only reachable once the quiz is completed.
        let target = if target == Step::Results && !self.state().quiz.completed {
            self.notice = Some("Finish the quiz to see your results.".to_string());
            Step::Quiz
        } else {
            target
        };

        // Everything past name entry requires a stored name.
        let target = if target.position() > Step::NameEntry.position()
            && self.state().user.name.chars().count() < 2
        {
            self.notice = Some("Please enter your name first (at least 2 characters).".to_string());
            Step::NameEntry
        } else {
            target
        };

        if target == self.step {
            return;
        }

        // The countdown lives only while the quiz screen is active.
        self.quiz_timer = None;
        if target == Step::Quiz && !self.state().quiz.completed {
            self.quiz_timer = Some(QuizTimer::start(self.config.quiz.time_limit()));
        }

        if target == Step::Certificate && self.certificate.is_none() {
            let recipient = self.state().user.name.clone();
            let score = self.state().quiz.score;
            self.certificate = Some(Certificate::new(recipient, score));
        }

        tracing::debug!(from = ?self.step, to = ?target, "step change");
        self.step = target;
        self.notice = None;
        self.dispatch(SessionIntent::UpdateProgress(target.progress_percent()));
    }

    fn go_next(&mut self) {
        self.go_to(self.step.next());
    }

    fn go_previous(&mut self) {
        self.go_to(self.step.previous());
    }

    fn go_home(&mut self) {
        self.go_to(Step::home());
    }

    // ------------------------------------------------------------------
    // Event handling

    pub fn on_tick(&mut self) {
        if self.step != Step::Quiz {
            return;
        }
        let expired = self
            .quiz_timer
            .as_mut()
            .is_some_and(QuizTimer::take_expiry);
        if expired && !self.state().quiz.completed {
            tracing::info!("quiz time limit reached, auto-submitting");
            self.submit_quiz();
        }
    }

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::HealthProbe(Ok(status)) => {
                self.backend_status = BackendStatus::Online(status);
            }
            AppEvent::HealthProbe(Err(err)) => {
                tracing::warn!("backend health probe failed: {err}");
                self.backend_status = BackendStatus::Offline(err);
            }
            AppEvent::ChatReply(outcome) => self.on_chat_reply(outcome),
            AppEvent::VisionReply { capture, outcome } => self.on_vision_reply(capture, outcome),
            AppEvent::TranscriptionReply(outcome) => self.on_transcription_reply(outcome),
            AppEvent::SynthesisReply(outcome) => self.on_synthesis_reply(outcome),
            AppEvent::CaptureFinished { path } => {
                self.transcribe_path = path.display().to_string();
                self.submit_transcription(path);
            }
            AppEvent::Input(_) | AppEvent::Tick | AppEvent::Resize(..) => {}
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('n') => {
                    self.go_next();
                    return;
                }
                KeyCode::Char('p') => {
                    self.go_previous();
                    return;
                }
                KeyCode::Char('w') => {
                    self.go_home();
                    return;
                }
                _ => {}
            }
        }

        match self.step {
            Step::Welcome | Step::Info => self.on_readonly_key(key),
            Step::NameEntry => self.on_name_key(key),
            Step::DemoChat => self.on_chat_key(key),
            Step::DemoVision => self.on_vision_key(key),
            Step::DemoSpeechToText => self.on_transcribe_key(key),
            Step::DemoTextToSpeech => self.on_speak_key(key),
            Step::Quiz => self.on_quiz_key(key),
            Step::Results => self.on_results_key(key),
            Step::Certificate => self.on_certificate_key(key),
        }
    }

    fn on_readonly_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Right => self.go_next(),
            KeyCode::Left => self.go_previous(),
            _ => {}
        }
    }

    fn on_name_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                if self.name_input.chars().count() < 50 {
                    self.name_input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.name_input.pop();
            }
            KeyCode::Enter => {
                let name = self.name_input.trim().to_string();
                // Validated here, before dispatch; the store never rejects.
                if name.chars().count() >= 2 {
                    self.dispatch(SessionIntent::SetUserName(name));
                    self.go_next();
                } else {
                    self.notice =
                        Some("Names need at least 2 characters.".to_string());
                }
            }
            _ => {}
        }
    }

    fn on_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.chat_input.push(c),
            KeyCode::Backspace => {
                self.chat_input.pop();
            }
            KeyCode::Tab => {
                // Cycle the starter questions into the input line.
                self.chat_input = SUGGESTED_PROMPTS[self.suggestion_index].to_string();
                self.suggestion_index = (self.suggestion_index + 1) % SUGGESTED_PROMPTS.len();
            }
            KeyCode::Enter => self.submit_chat(),
            _ => {}
        }
    }

    fn on_vision_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.vision_focus = match self.vision_focus {
                    VisionField::Path => VisionField::Prompt,
                    VisionField::Prompt => VisionField::Path,
                };
            }
            KeyCode::Char(c) => match self.vision_focus {
                VisionField::Path => self.vision_path.push(c),
                VisionField::Prompt => self.vision_prompt.push(c),
            },
            KeyCode::Backspace => {
                match self.vision_focus {
                    VisionField::Path => self.vision_path.pop(),
                    VisionField::Prompt => self.vision_prompt.pop(),
                };
            }
            KeyCode::Enter => self.submit_vision(),
            _ => {}
        }
    }

    fn on_transcribe_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('r') {
            self.toggle_capture();
            return;
        }
        match key.code {
            KeyCode::Char(c) => self.transcribe_path.push(c),
            KeyCode::Backspace => {
                self.transcribe_path.pop();
            }
            KeyCode::Enter => {
                let path = self.transcribe_path.trim().to_string();
                if path.is_empty() {
                    self.notice = Some("Enter the path of an audio file first.".to_string());
                } else {
                    self.submit_transcription(PathBuf::from(path));
                }
            }
            _ => {}
        }
    }

    fn on_speak_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.speak_input.push(c),
            KeyCode::Backspace => {
                self.speak_input.pop();
            }
            KeyCode::Enter => self.submit_speech(),
            _ => {}
        }
    }

    fn on_quiz_key(&mut self, key: KeyEvent) {
        if self.state().quiz.completed {
            if key.code == KeyCode::Enter || key.code == KeyCode::Right {
                self.go_to(Step::Results);
            }
            return;
        }
        match key.code {
            KeyCode::Char(c @ '1'..='4') => {
                let answer = c as usize - '1' as usize;
                let question_index = self.state().quiz.current_question;
                self.dispatch(SessionIntent::SetQuizAnswer {
                    question_index,
                    answer,
                });
            }
            KeyCode::Left => self.dispatch(SessionIntent::PreviousQuestion),
            KeyCode::Right => self.dispatch(SessionIntent::NextQuestion),
            // Jump navigation; both targets are valid indices by construction.
            KeyCode::Home => self.dispatch(SessionIntent::SetCurrentQuestion(0)),
            KeyCode::End => {
                self.dispatch(SessionIntent::SetCurrentQuestion(QUESTION_COUNT - 1));
            }
            KeyCode::Enter => {
                let quiz = &self.state().quiz;
                let on_last = quiz.current_question == QUESTION_COUNT - 1;
                let all_answered = quiz::answered_count(&quiz.answers) == QUESTION_COUNT;
                if on_last && all_answered {
                    self.submit_quiz();
                } else if on_last {
                    self.notice = Some("Answer every question before submitting.".to_string());
                } else {
                    self.dispatch(SessionIntent::NextQuestion);
                }
            }
            _ => {}
        }
    }

    fn on_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') => {
                self.dispatch(SessionIntent::ResetQuiz);
                self.certificate = None;
                self.certificate_file = None;
                self.go_to(Step::Quiz);
            }
            KeyCode::Enter | KeyCode::Right => self.go_next(),
            KeyCode::Left => self.go_previous(),
            _ => {}
        }
    }

    fn on_certificate_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => self.save_certificate(),
            KeyCode::Left => self.go_previous(),
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Quiz

    fn submit_quiz(&mut self) {
        let score = quiz::score(question_bank(), &self.state().quiz.answers);
        self.dispatch(SessionIntent::CompleteQuiz(score));
        // Cancel the countdown so the timeout path cannot submit again.
        self.quiz_timer = None;
        tracing::info!(score, "quiz submitted");
        self.go_to(Step::Results);
    }

    // ------------------------------------------------------------------
    // Chat demo

    fn submit_chat(&mut self) {
        let text = self.chat_input.trim().to_string();
        if text.is_empty() || self.state().demos.chat.busy {
            return;
        }

        // Prior turns only; the new message travels in the request itself.
        let history: Vec<ChatTurn> = self
            .state()
            .demos
            .chat
            .history
            .iter()
            .map(|message| ChatTurn {
                role: match message.role {
                    ChatRole::User => "user",
                    ChatRole::Assistant => "assistant",
                },
                content: message.content.clone(),
            })
            .collect();

        self.dispatch(SessionIntent::AppendChatMessage(ChatMessage::user(
            text.clone(),
        )));
        self.dispatch(SessionIntent::SetChatBusy(true));
        self.chat_input.clear();

        let client = self.client.clone();
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let outcome = client
                .chat(text, history)
                .await
                .map_err(|err| err.to_string());
            let _ = events.send(AppEvent::ChatReply(outcome));
        });
    }

    fn on_chat_reply(&mut self, outcome: Result<String, String>) {
        self.dispatch(SessionIntent::SetChatBusy(false));
        let content = match outcome {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!("chat request failed: {err}");
                CHAT_FALLBACK.to_string()
            }
        };
        self.dispatch(SessionIntent::AppendChatMessage(ChatMessage::assistant(
            content,
        )));
    }

    // ------------------------------------------------------------------
    // Vision demo

    fn submit_vision(&mut self) {
        let path_text = self.vision_path.trim().to_string();
        if path_text.is_empty() {
            self.notice = Some("Enter the path of an image file first.".to_string());
            return;
        }
        if self.state().demos.vision.busy {
            return;
        }

        let prompt = {
            let entered = self.vision_prompt.trim();
            if entered.is_empty() {
                DEFAULT_VISION_PROMPT.to_string()
            } else {
                entered.to_string()
            }
        };

        let path = PathBuf::from(&path_text);
        let capture = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or(path_text);

        self.dispatch(SessionIntent::AppendVisionMessage(VisionMessage::user(
            prompt.clone(),
            Some(capture.clone()),
        )));
        self.dispatch(SessionIntent::SetVisionBusy(true));

        let client = self.client.clone();
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let outcome = analyze_image_file(&client, &path, prompt).await;
            let _ = events.send(AppEvent::VisionReply { capture, outcome });
        });
    }

    fn on_vision_reply(&mut self, capture: String, outcome: Result<String, String>) {
        self.dispatch(SessionIntent::SetVisionBusy(false));
        let analysis = match outcome {
            Ok(analysis) => analysis,
            Err(err) => {
                tracing::warn!("vision request failed: {err}");
                VISION_FALLBACK.to_string()
            }
        };
        // Failures land in the history like any other result.
        self.dispatch(SessionIntent::AppendVisionResult {
            capture,
            analysis: analysis.clone(),
        });
        self.dispatch(SessionIntent::AppendVisionMessage(VisionMessage::assistant(
            analysis,
        )));
    }

    // ------------------------------------------------------------------
    // Speech-to-text demo

    fn submit_transcription(&mut self, path: PathBuf) {
        if self.state().demos.transcription.busy {
            return;
        }
        self.dispatch(SessionIntent::SetTranscriptionBusy(true));

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "recording.wav".to_string());

        let client = self.client.clone();
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let outcome = match tokio::fs::read(&path).await {
                Ok(audio) => client
                    .transcribe(audio, filename)
                    .await
                    .map_err(|err| err.to_string()),
                Err(err) => Err(format!("could not read '{}': {err}", path.display())),
            };
            let _ = events.send(AppEvent::TranscriptionReply(outcome));
        });
    }

    fn on_transcription_reply(
        &mut self,
        outcome: Result<crate::api::types::TranscriptionReply, String>,
    ) {
        self.dispatch(SessionIntent::SetTranscriptionBusy(false));
        let record = match outcome {
            Ok(reply) => TranscriptionRecord::ok(reply.text, reply.language, reply.confidence),
            Err(err) => {
                tracing::warn!("transcription request failed: {err}");
                TranscriptionRecord::error(TRANSCRIPTION_FALLBACK)
            }
        };
        self.dispatch(SessionIntent::AppendTranscription(record));
    }

    /// Start or stop the external recorder, when one is configured.
    fn toggle_capture(&mut self) {
        if let Some(session) = self.capture.take() {
            self.dispatch(SessionIntent::SetRecordingFlag(false));
            let events = self.events.clone();
            let mut child = session.child;
            let path = session.path;
            self.runtime.spawn(async move {
                let _ = child.start_kill();
                let _ = child.wait().await;
                let _ = events.send(AppEvent::CaptureFinished { path });
            });
            return;
        }

        let Some(command) = self.config.audio.capture_command.clone() else {
            self.notice =
                Some("No capture_command configured; enter an audio file path instead.".to_string());
            return;
        };
        let mut parts = command.split_whitespace();
        let Some(program) = parts.next() else {
            self.notice = Some("capture_command is empty.".to_string());
            return;
        };

        let dir = self.config.audio.output_dir();
        if let Err(err) = std::fs::create_dir_all(&dir) {
            self.notice = Some(format!("could not create '{}': {err}", dir.display()));
            return;
        }
        let path = dir.join(format!("capture-{}.wav", Uuid::new_v4()));

        // Spawning needs the runtime's reactor.
        let runtime = self.runtime.clone();
        let _guard = runtime.enter();
        match Command::new(program)
            .args(parts)
            .arg(&path)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .kill_on_drop(true)
            .spawn()
        {
            Ok(child) => {
                tracing::info!(recorder = program, path = %path.display(), "capture started");
                self.capture = Some(CaptureSession { child, path });
                self.dispatch(SessionIntent::SetRecordingFlag(true));
            }
            Err(err) => {
                tracing::warn!("could not start recorder '{program}': {err}");
                self.notice = Some(format!("Could not start the recorder: {err}"));
            }
        }
    }

    // ------------------------------------------------------------------
    // Text-to-speech demo

    fn submit_speech(&mut self) {
        let text = self.speak_input.trim().to_string();
        if text.is_empty() || self.state().demos.synthesis.generating {
            return;
        }
        self.dispatch(SessionIntent::SetSynthesisBusy(true));

        let client = self.client.clone();
        let events = self.events.clone();
        let voice = self.config.audio.voice.clone();
        let speed = self.config.audio.speed;
        let dir = self.config.audio.output_dir();
        self.runtime.spawn(async move {
            let outcome = synthesize_to_file(&client, text, voice, speed, dir).await;
            let _ = events.send(AppEvent::SynthesisReply(outcome));
        });
    }

    fn on_synthesis_reply(&mut self, outcome: Result<AudioClip, String>) {
        self.dispatch(SessionIntent::SetSynthesisBusy(false));
        match outcome {
            Ok(clip) => {
                self.notice = Some(format!("Audio saved to {}", clip.path.display()));
                self.speak_input.clear();
                self.dispatch(SessionIntent::AppendSynthesizedAudio(clip));
            }
            Err(err) => {
                tracing::warn!("synthesis request failed: {err}");
                self.notice = Some("Speech synthesis failed. Please try again.".to_string());
            }
        }
    }

    // ------------------------------------------------------------------
    // Certificate

    fn save_certificate(&mut self) {
        let Some(certificate) = &self.certificate else {
            return;
        };
        let dir = dirs::document_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("aikiosk");
        match certificate.save_to(&dir) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "certificate saved");
                self.notice = Some(format!("Certificate saved to {}", path.display()));
                self.certificate_file = Some(path);
            }
            Err(err) => {
                tracing::warn!("could not save certificate: {err}");
                self.notice = Some(format!("Could not save the certificate: {err}"));
            }
        }
    }
}

/// Read, validate, encode, and analyze one image file.
async fn analyze_image_file(
    client: &ApiClient,
    path: &Path,
    prompt: String,
) -> Result<String, String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| format!("could not read '{}': {err}", path.display()))?;
    image::load_from_memory(&bytes).map_err(|err| format!("not a supported image: {err}"))?;
    client
        .analyze_image(BASE64.encode(&bytes), prompt)
        .await
        .map_err(|err| err.to_string())
}

/// Synthesize speech and persist the clip under `dir`.
async fn synthesize_to_file(
    client: &ApiClient,
    text: String,
    voice: String,
    speed: f32,
    dir: PathBuf,
) -> Result<AudioClip, String> {
    let bytes = client
        .synthesize(text.clone(), voice.clone(), speed)
        .await
        .map_err(|err| err.to_string())?;
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|err| format!("could not create '{}': {err}", dir.display()))?;
    let path = dir.join(format!("speech-{}.wav", Uuid::new_v4()));
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|err| format!("could not write '{}': {err}", path.display()))?;
    Ok(AudioClip {
        id: Uuid::new_v4(),
        text,
        voice,
        speed,
        path,
        byte_len: bytes.len(),
        generated_at: Utc::now(),
    })
}
