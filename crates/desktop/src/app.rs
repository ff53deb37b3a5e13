use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};
use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Element, Length, Subscription, Task, Theme};

use facematch_core::shared::constants::DEFAULT_ENDPOINT;
use facematch_core::upload::domain::image_submitter::{ImageSubmitter, SubmitError};
use facematch_core::upload::domain::selected_file::SelectedFile;
use facematch_core::upload::domain::upload_form::{SubmissionId, SubmitOutcome, UploadForm};
use facematch_core::upload::infrastructure::http_image_submitter::HttpImageSubmitter;

use crate::tabs;
use crate::theme;
use crate::workers::submit_worker::{self, SubmitFinished};

const SUBMIT_POLL_INTERVAL: Duration = Duration::from_millis(50);
const SYSTEM_THEME_POLL_INTERVAL: Duration = Duration::from_secs(2);

// ---------------------------------------------------------------------------
// Tab enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Main,
    About,
}

impl Tab {
    const ALL: &[Tab] = &[Tab::Main, Tab::About];

    fn label(self) -> &'static str {
        match self {
            Tab::Main => "Main",
            Tab::About => "About",
        }
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    SelectFace,
    FaceSelected(Option<PathBuf>),
    SelectTest,
    TestSelected(Option<PathBuf>),
    Submit,
    PollSubmissions,
    FaceBrowseHover(bool),
    TestBrowseHover(bool),
    SubmitHover(bool),
    PollSystemTheme,
}

/// Which animated controls the pointer is over.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hover {
    pub face: bool,
    pub test: bool,
    pub submit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    active_tab: Tab,
    dark: bool,
    form: UploadForm,
    /// Renderer handle for the current result; rebuilt whenever it changes.
    result_handle: Option<image::Handle>,
    submitter: Option<Arc<dyn ImageSubmitter>>,
    /// At most one entry once a submission has started: starting a new one
    /// drops the receivers of the ones it supersedes.
    in_flight: Vec<(SubmissionId, Receiver<SubmitFinished>)>,
    hover: Hover,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let submitter: Option<Arc<dyn ImageSubmitter>> = match HttpImageSubmitter::local() {
            Ok(s) => Some(Arc::new(s)),
            Err(e) => {
                log::error!("Failed to create HTTP client: {e}");
                None
            }
        };
        let mut app = Self::with_submitter(submitter);
        app.dark = theme::system_prefers_dark();
        (app, Task::none())
    }

    fn with_submitter(submitter: Option<Arc<dyn ImageSubmitter>>) -> Self {
        Self {
            active_tab: Tab::Main,
            dark: false,
            form: UploadForm::new(),
            result_handle: None,
            submitter,
            in_flight: Vec::new(),
            hover: Hover::default(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
            }
            Message::SelectFace => {
                return Task::perform(pick_file("Select a face image"), Message::FaceSelected);
            }
            Message::FaceSelected(path) => {
                let file = path.and_then(|p| read_selection(&p));
                self.form.select_face(file);
            }
            Message::SelectTest => {
                return Task::perform(pick_file("Select a test image"), Message::TestSelected);
            }
            Message::TestSelected(path) => {
                let file = path.and_then(|p| read_selection(&p));
                self.form.select_test(file);
            }
            Message::Submit => self.start_submission(),
            Message::PollSubmissions => self.poll_submissions(),
            Message::FaceBrowseHover(hovered) => self.hover.face = hovered,
            Message::TestBrowseHover(hovered) => self.hover.test = hovered,
            Message::SubmitHover(hovered) => self.hover.submit = hovered,
            Message::PollSystemTheme => {
                let dark = theme::system_prefers_dark();
                if dark != self.dark {
                    log::debug!("System theme changed (dark: {dark})");
                    self.dark = dark;
                }
            }
        }
        Task::none()
    }

    /// Starts a request without waiting for earlier ones; whichever
    /// submission started last owns the output region.
    fn start_submission(&mut self) {
        let pending = self.form.begin_submit();
        let id = pending.id;

        // Older responses would come back Stale; stop listening for them.
        let superseded = self.in_flight.len();
        self.in_flight.clear();
        if superseded > 0 {
            log::debug!("Submission {id} supersedes {superseded} in-flight request(s)");
        }

        match &self.submitter {
            Some(submitter) => {
                let rx = submit_worker::spawn(submitter.clone(), pending);
                self.in_flight.push((id, rx));
            }
            None => {
                let error = SubmitError::Request {
                    url: DEFAULT_ENDPOINT.to_string(),
                    source: "HTTP client unavailable".into(),
                };
                self.form.finish_submit(id, Err(error));
            }
        }
    }

    fn poll_submissions(&mut self) {
        let mut finished = Vec::new();
        self.in_flight.retain(|(id, rx)| match rx.try_recv() {
            Ok(done) => {
                finished.push(done);
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => {
                log::warn!("Submission {id} worker exited without a response");
                false
            }
        });

        for done in finished {
            if self.form.finish_submit(done.id, done.response) == SubmitOutcome::Displayed {
                self.refresh_result_handle();
            }
        }
    }

    fn refresh_result_handle(&mut self) {
        // Release the old handle before decoding the new bytes.
        self.result_handle = None;
        self.result_handle = self
            .form
            .result()
            .map(|result| image::Handle::from_bytes(result.bytes().to_vec()));
    }

    pub fn view(&self) -> Element<'_, Message> {
        let theme = self.theme();

        let tab_bar = row(Tab::ALL
            .iter()
            .map(|&tab| {
                let label = text(tab.label()).size(13.0);
                let btn = button(label)
                    .on_press(Message::TabSelected(tab))
                    .padding([6, 14]);
                if tab == self.active_tab {
                    btn.style(button::primary).into()
                } else {
                    btn.style(button::text).into()
                }
            })
            .collect::<Vec<_>>())
        .spacing(2);

        let content: Element<'_, Message> = match self.active_tab {
            Tab::Main => tabs::main_tab::view(
                &self.form,
                self.result_handle.as_ref(),
                self.hover,
                &theme,
            ),
            Tab::About => tabs::about_tab::view(),
        };

        let tab_content = container(scrollable(content).height(Length::Fill))
            .padding(16)
            .height(Length::Fill);

        column![tab_bar, tab_content]
            .spacing(0)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::app_theme(self.dark)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let system_theme =
            iced::time::every(SYSTEM_THEME_POLL_INTERVAL).map(|_| Message::PollSystemTheme);
        let submissions = if self.in_flight.is_empty() {
            Subscription::none()
        } else {
            iced::time::every(SUBMIT_POLL_INTERVAL).map(|_| Message::PollSubmissions)
        };
        Subscription::batch([system_theme, submissions])
    }
}

/// File picker without a type filter: any file may be submitted.
async fn pick_file(title: &'static str) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(title)
        .pick_file()
        .await
        .map(|h| h.path().to_path_buf())
}

/// An unreadable file behaves like a cancelled picker.
fn read_selection(path: &std::path::Path) -> Option<SelectedFile> {
    match SelectedFile::read(path) {
        Ok(file) => Some(file),
        Err(e) => {
            log::warn!("Ignoring selection: {e}");
            None
        }
    }
}
