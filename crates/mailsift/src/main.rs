//! `MailSift` - desktop client for an email classification backend.
//!
//! Paste or attach an email, send it off for analysis, and get back a
//! category plus a suggested reply. Built on the iced GUI framework with
//! a reqwest-backed API client in `mailsift-core`.

mod message;
mod model;
mod style;
mod view;

use std::path::PathBuf;
use std::time::Duration;

use iced::futures::SinkExt;
use iced::widget::{Stack, column, container, scrollable, text_editor};
use iced::{Element, Length, Subscription, Task};
use tokio::sync::broadcast;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use mailsift_core::ClassifyClient;

use message::{Message, ToastMessage};
use model::{AppSettings, Attachment, FlowState, SubmissionState, Toast, Toasts};
use style::widgets::palette::ThemeMode;
use style::widgets::{self, palette};

/// How long the copy button shows its confirmation caption.
const COPY_CONFIRM_INTERVAL: Duration = Duration::from_secs(2);

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailsift=debug,mailsift_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MailSift");

    iced::application(MailSift::new, MailSift::update, MailSift::view)
        .title("MailSift")
        .subscription(MailSift::subscription)
        .run()
}

/// Top-level application state.
struct MailSift {
    /// Submission form, flow state, and result data.
    form: SubmissionState,
    /// Editor buffer for the email content.
    editor: text_editor::Content,
    /// Currently displayed toasts.
    toasts: Toasts,
    /// Persisted settings.
    settings: AppSettings,
    /// Classification API client.
    client: ClassifyClient,
}

impl Default for MailSift {
    fn default() -> Self {
        let settings = AppSettings::default();
        let client = ClassifyClient::new(&settings.backend_url);
        Self {
            form: SubmissionState::new(),
            editor: text_editor::Content::new(),
            toasts: Toasts::new(),
            settings,
            client,
        }
    }
}

impl MailSift {
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        palette::set_theme(app.settings.theme_mode);
        (app, Task::perform(load_settings(), Message::SettingsLoaded))
    }

    /// Displays a toast and schedules its auto-dismiss, if it has one.
    fn push_toast(&mut self, toast: Toast) -> Task<Message> {
        match self.toasts.push(toast) {
            Some((id, after)) => Task::perform(tokio::time::sleep(after), move |()| {
                Message::Toast(ToastMessage::Expired(id))
            }),
            None => Task::none(),
        }
    }

    #[allow(clippy::too_many_lines)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EditorAction(action) => {
                self.editor.perform(action);
                self.form.edit(self.editor.text());
            }
            Message::Submit => {
                if let Some(request) = self.form.submit() {
                    let client = self.client.clone();
                    return Task::perform(
                        async move { client.classify(request).await.map_err(|e| e.to_string()) },
                        Message::Classified,
                    );
                }
            }
            Message::Classified(result) => {
                let toast = result.as_ref().ok().map(|classification| {
                    info!("email classified as {:?}", classification.category);
                    Toast::success("Email analyzed")
                        .description(format!("Classified as '{}'.", classification.category))
                });
                self.form.settle(result);
                if let Some(toast) = toast {
                    return self.push_toast(toast);
                }
            }
            Message::PickFile => {
                return Task::perform(pick_file(), Message::FileChosen);
            }
            Message::FileChosen(Some(path)) => {
                return Task::perform(read_attachment(path), Message::FileRead);
            }
            Message::FileChosen(None) => {} // Dialog dismissed
            Message::FileRead(Ok(attachment)) => {
                self.editor = text_editor::Content::with_text(&attachment.contents);
                self.form.attach(attachment);
                // Resync from the editor, which normalizes line endings; an
                // edit-detection against the raw file text would otherwise
                // drop the attachment on the first cursor move.
                self.form.email_content = self.editor.text();
            }
            Message::FileRead(Err(e)) => {
                warn!("failed to read attached file: {e}");
                return self.push_toast(Toast::error("Could not read file").description(e));
            }
            Message::CopyResponse => {
                if let FlowState::Success(classification) = &self.form.flow {
                    self.form.copy_confirmed = true;
                    let copy = iced::clipboard::write(classification.response.clone());
                    let restore = Task::perform(tokio::time::sleep(COPY_CONFIRM_INTERVAL), |()| {
                        Message::CopyCaptionRestored
                    });
                    return Task::batch([copy, restore]);
                }
            }
            Message::CopyCaptionRestored => {
                self.form.copy_confirmed = false;
            }
            Message::Reset => {
                self.form.reset();
                self.editor = text_editor::Content::new();
            }
            Message::Toast(toast_message) => return self.handle_toast(toast_message),
            Message::BackendFailure(event) => {
                warn!("backend request failed: {}", event.message);
                return self.push_toast(
                    Toast::error("Unexpected error")
                        .description("Your request could not be processed."),
                );
            }
            Message::SettingsLoaded(Ok(settings)) => {
                info!("settings loaded: theme={:?}", settings.theme_mode);
                // Only rebuild the client on an actual URL change. The failure
                // subscription is keyed by URL, so a rebuild under the same key
                // would leave the running stream holding a receiver from the
                // dropped client and the feed would never deliver again.
                if settings.backend_url != self.settings.backend_url {
                    self.client = ClassifyClient::new(&settings.backend_url);
                }
                self.settings = settings;
                palette::set_theme(self.settings.theme_mode);
            }
            Message::SettingsLoaded(Err(e)) => {
                info!("no usable settings, using defaults: {e}");
            }
            Message::SettingsSaved(Ok(())) => {}
            Message::SettingsSaved(Err(e)) => {
                warn!("failed to save settings: {e}");
            }
            Message::ToggleTheme => {
                self.settings.theme_mode = match self.settings.theme_mode {
                    ThemeMode::Light => ThemeMode::Dark,
                    ThemeMode::Dark => ThemeMode::Light,
                };
                palette::set_theme(self.settings.theme_mode);
                return Task::perform(save_settings(self.settings.clone()), Message::SettingsSaved);
            }
        }
        Task::none()
    }

    fn handle_toast(&mut self, message: ToastMessage) -> Task<Message> {
        match message {
            ToastMessage::Dismiss(id) | ToastMessage::Expired(id) => {
                self.toasts.dismiss(id);
            }
            ToastMessage::ActionPressed(id) => {
                if let Some(next) = self.toasts.activate_action(id) {
                    return Task::done(next);
                }
            }
            ToastMessage::CancelPressed(id) => {
                if let Some(next) = self.toasts.activate_cancel(id) {
                    return Task::done(next);
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            view::view_steps(self.form.step()),
            view::view_form(&self.editor, &self.form),
            view::view_result(&self.form),
        ]
        .spacing(24)
        .padding(24);

        let page = column![
            view::view_header(self.settings.theme_mode),
            scrollable(
                container(container(content).max_width(760.0))
                    .width(Length::Fill)
                    .align_x(iced::alignment::Horizontal::Center)
            )
            .height(Length::Fill)
            .style(widgets::scrollable_style),
        ];

        let background = container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| {
                let p = palette::current();
                container::Style {
                    background: Some(iced::Background::Color(p.background)),
                    text_color: Some(p.text_primary),
                    ..Default::default()
                }
            });

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(background)
            .push(view::view_toasts(&self.toasts))
            .into()
    }

    /// Forwards backend failure events into the message loop.
    ///
    /// Keyed by backend URL so a client rebuild after a settings load
    /// replaces the feed.
    fn subscription(&self) -> Subscription<Message> {
        /// Failure feed handle whose subscription identity is the backend URL.
        struct FailureFeed {
            url: String,
            failures: broadcast::Receiver<mailsift_core::RequestFailed>,
        }

        impl std::hash::Hash for FailureFeed {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.url.hash(state);
            }
        }

        Subscription::run_with(
            FailureFeed {
                url: self.settings.backend_url.clone(),
                failures: self.client.failures(),
            },
            |feed| {
                let mut failures = feed.failures.resubscribe();
                iced::stream::channel(
                    16,
                    move |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
                        loop {
                            match failures.recv().await {
                                Ok(event) => {
                                    let _ = output.send(Message::BackendFailure(event)).await;
                                }
                                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                                    warn!("failure feed lagged, skipped {skipped} events");
                                }
                                Err(broadcast::error::RecvError::Closed) => break,
                            }
                        }
                    },
                )
            },
        )
    }
}

/// Opens the native file picker for an email file.
async fn pick_file() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Attach email file")
        .add_filter("Email files", &["txt", "eml"])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Reads an attached file as text.
async fn read_attachment(path: PathBuf) -> Result<Attachment, String> {
    let name = path.file_name().map_or_else(
        || "attachment".to_string(),
        |n| n.to_string_lossy().into_owned(),
    );
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| e.to_string())?;
    Ok(Attachment { name, contents })
}

/// Path of the settings file under the platform config directory.
fn settings_path() -> Result<PathBuf, String> {
    dirs::config_dir()
        .map(|dir| dir.join("mailsift").join("settings.json"))
        .ok_or_else(|| "no config directory on this platform".to_string())
}

/// Loads settings from disk.
async fn load_settings() -> Result<AppSettings, String> {
    let path = settings_path()?;
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| e.to_string())?;
    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

/// Saves settings to disk, creating the config directory if needed.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let path = settings_path()?;
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }
    let contents = serde_json::to_string_pretty(&settings).map_err(|e| e.to_string())?;
    tokio::fs::write(&path, contents)
        .await
        .map_err(|e| e.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_load_with_same_url_keeps_failure_feed_alive() {
        let mut app = MailSift::default();
        let mut feed = app.client.failures();

        let _ = app.update(Message::SettingsLoaded(Ok(AppSettings::default())));

        // A receiver taken before the load must still be connected; a
        // client rebuild under an unchanged URL would close it while the
        // URL-keyed subscription keeps running against the dead sender.
        assert!(matches!(
            feed.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }

    #[test]
    fn test_settings_load_with_new_url_swaps_the_client() {
        let mut app = MailSift::default();
        let mut feed = app.client.failures();

        let settings = AppSettings {
            backend_url: "http://backend.internal:9000".to_string(),
            theme_mode: ThemeMode::Dark,
        };
        let _ = app.update(Message::SettingsLoaded(Ok(settings)));

        assert_eq!(app.settings.backend_url, "http://backend.internal:9000");
        // The old feed closes; the re-keyed subscription picks up the new
        // client's feed on the next subscription pass.
        assert!(matches!(
            feed.try_recv(),
            Err(broadcast::error::TryRecvError::Closed)
        ));
    }
}
