use teloxide::types::{
    ButtonRequest, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
    ReplyMarkup, WebAppInfo,
};
use url::Url;

use crate::model::reply::InteractiveControl;

pub fn make_web_app_keyboard(label: &str, url: &Url) -> InlineKeyboardMarkup {
    let button = InlineKeyboardButton::web_app(label, WebAppInfo { url: url.clone() });
    InlineKeyboardMarkup::new(vec![vec![button]])
}

pub fn make_location_keyboard(label: &str) -> KeyboardMarkup {
    let mut keyboard: Vec<Vec<KeyboardButton>> = vec![];
    let mut location_button = KeyboardButton::new(label);
    location_button.request = Some(ButtonRequest::Location);
    let row = vec![location_button];
    keyboard.push(row);
    let mut markup = KeyboardMarkup::new(keyboard);
    markup.resize_keyboard = Option::from(true);
    markup.one_time_keyboard = Option::from(true);
    markup
}

impl From<&InteractiveControl> for ReplyMarkup {
    fn from(control: &InteractiveControl) -> Self {
        match control {
            InteractiveControl::WebLink { label, url } => {
                ReplyMarkup::InlineKeyboard(make_web_app_keyboard(label, url))
            }
            InteractiveControl::LocationRequestButton { label } => {
                ReplyMarkup::Keyboard(make_location_keyboard(label))
            }
            InteractiveControl::DismissKeyboard => ReplyMarkup::kb_remove(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn web_link_becomes_single_web_app_button() {
        let url = Url::parse("https://yourdomain.com/webapp.html").unwrap();
        let control = InteractiveControl::WebLink {
            label: "Open".to_owned(),
            url: url.clone(),
        };

        let ReplyMarkup::InlineKeyboard(markup) = ReplyMarkup::from(&control) else {
            panic!("expected an inline keyboard");
        };
        assert_eq!(markup.inline_keyboard.len(), 1);
        assert_eq!(markup.inline_keyboard[0].len(), 1);
        let button = &markup.inline_keyboard[0][0];
        assert_eq!(button.text, "Open");
        assert!(matches!(
            &button.kind,
            InlineKeyboardButtonKind::WebApp(info) if info.url == url
        ));
    }

    #[test]
    fn location_request_becomes_resized_reply_keyboard() {
        let control = InteractiveControl::LocationRequestButton {
            label: "Send".to_owned(),
        };

        let ReplyMarkup::Keyboard(markup) = ReplyMarkup::from(&control) else {
            panic!("expected a reply keyboard");
        };
        assert_eq!(markup.resize_keyboard, Some(true));
        assert_eq!(markup.keyboard.len(), 1);
        let button = &markup.keyboard[0][0];
        assert_eq!(button.text, "Send");
        assert!(matches!(button.request, Some(ButtonRequest::Location)));
    }

    #[test]
    fn dismiss_removes_keyboard() {
        let markup = ReplyMarkup::from(&InteractiveControl::DismissKeyboard);
        assert!(matches!(markup, ReplyMarkup::KeyboardRemove(_)));
    }
}
