use std::cell::RefCell;
use std::rc::Rc;

/// Host-side observer of the typed text.
///
/// Called after every operation that changes the buffer, with the full
/// current text rather than a diff, so a host mirroring the value into its
/// own field stays in sync keystroke by keystroke.
pub trait KeyListener {
    fn on_key(&mut self, current_text: &str);
}

impl<F> KeyListener for F
where
    F: FnMut(&str),
{
    fn on_key(&mut self, current_text: &str) {
        self(current_text)
    }
}

/// A listener shared by both language layouts of a keyboard.
pub type SharedListener = Rc<RefCell<dyn KeyListener>>;

/// Wraps a listener so it can be registered on a keyboard.
pub fn shared<L: KeyListener + 'static>(listener: L) -> SharedListener {
    Rc::new(RefCell::new(listener))
}
