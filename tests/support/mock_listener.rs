use std::cell::RefCell;
use std::rc::Rc;
use vkbd_mini::traits::{KeyListener, SharedListener};

/// Host stand-in that mirrors every reported value into its own field.
#[derive(Default, Debug, Clone)]
pub struct MockHost {
    pub field: String,
    pub history: Vec<String>,
}

impl KeyListener for MockHost {
    fn on_key(&mut self, current_text: &str) {
        self.field = current_text.to_string();
        self.history.push(current_text.to_string());
    }
}

impl MockHost {
    /// Returns the host handle and the same host as a registrable listener.
    pub fn shared() -> (Rc<RefCell<MockHost>>, SharedListener) {
        let host = Rc::new(RefCell::new(MockHost::default()));
        let listener: SharedListener = host.clone();
        (host, listener)
    }
}
