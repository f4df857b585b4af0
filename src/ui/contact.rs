// SPDX-License-Identifier: MPL-2.0
//! Contact form.
//!
//! Name, email and message are all required and the email must contain an
//! `@`. Submitting a valid form only swaps the form for a thank-you note;
//! nothing is sent or stored. The direct mail address is always shown.

use crate::app::config::defaults::CONTACT_EMAIL;
use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, text_editor, text_input, Column, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
}

/// Reason a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingField,
    InvalidEmail,
}

impl FormError {
    fn i18n_key(self) -> &'static str {
        match self {
            FormError::MissingField => "contact-error-required",
            FormError::InvalidEmail => "contact-error-email",
        }
    }
}

/// Checks the form fields. Whitespace-only values count as missing.
pub fn validate(name: &str, email: &str, message: &str) -> Result<(), FormError> {
    if [name, email, message].iter().any(|field| field.trim().is_empty()) {
        return Err(FormError::MissingField);
    }
    if !email.contains('@') {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct State {
    name: String,
    email: String,
    message: text_editor::Content,
    submitted: bool,
    error: Option<FormError>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                self.error = None;
            }
            Message::EmailChanged(value) => {
                self.email = value;
                self.error = None;
            }
            Message::MessageEdited(action) => {
                if action.is_edit() {
                    self.error = None;
                }
                self.message.perform(action);
            }
            Message::Submit => {
                if self.submitted {
                    return Event::None;
                }
                match validate(&self.name, &self.email, &self.message.text()) {
                    Ok(()) => {
                        log::debug!("Contact form accepted");
                        self.submitted = true;
                        self.error = None;
                    }
                    Err(error) => self.error = Some(error),
                }
            }
            Message::Close => return Event::Close,
        }
        Event::None
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let close = button(Text::new(format!("← {}", i18n.tr("close-button"))).size(typography::BODY))
            .on_press(Message::Close);

        let mut content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(close)
            .push(Text::new(i18n.tr("contact-title")).size(typography::TITLE_LG));

        if self.submitted {
            content = content.push(Text::new(i18n.tr("contact-thank-you")).size(typography::TITLE_MD));
        } else {
            content = content
                .push(Text::new(i18n.tr("contact-intro")).size(typography::BODY_LG))
                .push(self.view_form(i18n));
        }

        content = content.push(
            Text::new(i18n.tr_with_args("contact-direct", &[("email", CONTACT_EMAIL)]))
                .size(typography::BODY),
        );

        container(scrollable(container(content).center_x(Length::Fill)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::panel)
            .into()
    }

    fn view_form<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut form = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("contact-name")).size(typography::BODY_SM))
            .push(
                text_input("", &self.name)
                    .on_input(Message::NameChanged)
                    .padding(spacing::XS)
                    .size(typography::BODY),
            )
            .push(Text::new(i18n.tr("contact-email")).size(typography::BODY_SM))
            .push(
                text_input("", &self.email)
                    .on_input(Message::EmailChanged)
                    .padding(spacing::XS)
                    .size(typography::BODY),
            )
            .push(Text::new(i18n.tr("contact-message")).size(typography::BODY_SM))
            .push(
                text_editor(&self.message)
                    .on_action(Message::MessageEdited)
                    .padding(spacing::XS)
                    .size(typography::BODY)
                    .height(Length::Fixed(sizing::THUMBNAIL)),
            );

        if let Some(error) = self.error {
            form = form.push(
                text(i18n.tr(error.i18n_key()))
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            );
        }

        form.push(
            button(Text::new(i18n.tr("contact-submit")).size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::Submit),
        )
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> State {
        let mut state = State::new();
        state.update(Message::NameChanged("Ada".into()));
        state.update(Message::EmailChanged("ada@example.org".into()));
        state.message = text_editor::Content::with_text("Hello there");
        state
    }

    #[test]
    fn validate_requires_every_field() {
        assert_eq!(validate("", "a@b", "hi"), Err(FormError::MissingField));
        assert_eq!(validate("Ada", "  ", "hi"), Err(FormError::MissingField));
        assert_eq!(validate("Ada", "a@b", "\n"), Err(FormError::MissingField));
    }

    #[test]
    fn validate_requires_at_sign() {
        assert_eq!(validate("Ada", "ada.example.org", "hi"), Err(FormError::InvalidEmail));
        assert_eq!(validate("Ada", "ada@example.org", "hi"), Ok(()));
    }

    #[test]
    fn valid_submission_shows_thank_you() {
        let mut state = filled();
        assert_eq!(state.update(Message::Submit), Event::None);
        assert!(state.is_submitted());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn invalid_submission_keeps_form_and_reports() {
        let mut state = filled();
        state.update(Message::EmailChanged("nope".into()));
        state.update(Message::Submit);
        assert!(!state.is_submitted());
        assert_eq!(state.error(), Some(FormError::InvalidEmail));

        state.update(Message::EmailChanged("yes@there".into()));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn empty_form_is_refused() {
        let mut state = State::new();
        state.update(Message::Submit);
        assert_eq!(state.error(), Some(FormError::MissingField));
    }

    #[test]
    fn close_bubbles_up() {
        let mut state = State::new();
        assert_eq!(state.update(Message::Close), Event::Close);
    }

    #[test]
    fn error_keys_are_translated() {
        use crate::app::config::Config;
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        for error in [FormError::MissingField, FormError::InvalidEmail] {
            assert!(!i18n.tr(error.i18n_key()).starts_with("MISSING"));
        }
    }
}
