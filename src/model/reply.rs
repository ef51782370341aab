use url::Url;

/// Button attached to a reply. Turned into Bot API markup by `utils::keyboard`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum InteractiveControl {
    WebLink { label: String, url: Url },
    LocationRequestButton { label: String },
    DismissKeyboard,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OutboundReply {
    pub text: String,
    pub attachment: Option<InteractiveControl>,
}

impl OutboundReply {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        OutboundReply {
            text: text.into(),
            attachment: None,
        }
    }

    pub(crate) fn with(mut self, control: InteractiveControl) -> Self {
        self.attachment = Some(control);
        self
    }

    #[cfg(test)]
    pub(crate) fn web_link(&self) -> Option<&Url> {
        match &self.attachment {
            Some(InteractiveControl::WebLink { url, .. }) => Some(url),
            _ => None,
        }
    }
}
