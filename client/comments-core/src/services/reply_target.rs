/// Reply targeting and compose state
///
/// Tracks which comment, if any, the next submission replies to, together
/// with the compose text. The UI binding owns rendering and focus; the
/// composer only records that focus was requested so the binding can consume
/// it.
use crate::models::Parent;

/// Which comment the next submission replies to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReplyTarget {
    #[default]
    Idle,
    Replying { target_id: String, author: String },
}

/// Compose-box state: text, reply target, pending focus request
#[derive(Debug, Default)]
pub struct Composer {
    text: String,
    target: ReplyTarget,
    focus_requested: bool,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn target(&self) -> &ReplyTarget {
        &self.target
    }

    pub fn is_replying(&self) -> bool {
        matches!(self.target, ReplyTarget::Replying { .. })
    }

    /// Start replying to a comment
    ///
    /// Pre-fills the compose text with a mention of the target's author and
    /// requests focus on the compose control. Calling this while already
    /// replying simply retargets; there is no intermediate state.
    pub fn begin_reply(&mut self, target_id: &str, author: &str) {
        self.target = ReplyTarget::Replying {
            target_id: target_id.to_string(),
            author: author.to_string(),
        };
        self.text = format!("@{} ", author);
        self.focus_requested = true;
    }

    /// Abandon the current reply target and clear the compose text
    pub fn cancel_reply(&mut self) {
        self.target = ReplyTarget::Idle;
        self.text.clear();
    }

    /// Reset after a successful submission: empty text, idle target
    pub fn reset(&mut self) {
        self.target = ReplyTarget::Idle;
        self.text.clear();
    }

    /// The parent reference the current state submits under
    pub fn parent(&self) -> Parent {
        match &self.target {
            ReplyTarget::Idle => Parent::Root,
            ReplyTarget::Replying { target_id, .. } => Parent::ReplyTo(target_id.clone()),
        }
    }

    /// Consume the pending focus request, if any
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}
