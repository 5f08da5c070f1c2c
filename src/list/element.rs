use std::fmt;

/// An element detached from a [`Queue`](crate::Queue).
///
/// Removing an element from a queue hands it over to the caller. The payload
/// is released when the `Element` is dropped, or moved out with
/// [`Element::into_value`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Element {
    value: String,
}

impl Element {
    pub(crate) fn new(value: String) -> Self {
        Self { value }
    }

    /// Returns the payload of the element.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the element and returns its payload.
    #[inline]
    pub fn into_value(self) -> String {
        self.value
    }

    /// Copies the payload into a NUL-terminated byte buffer.
    ///
    /// At most `buf.len() - 1` bytes of the payload are copied, longer payloads
    /// are silently truncated. The rest of the buffer is filled with zeros, so
    /// `buf[buf.len() - 1]` is always a terminator. An empty buffer is left
    /// untouched.
    ///
    /// Returns the number of payload bytes copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use text_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail("dolphin").unwrap();
    ///
    /// let element = queue.remove_head().unwrap();
    /// let mut buf = [0xffu8; 5];
    /// assert_eq!(element.copy_to(&mut buf), 4);
    /// assert_eq!(&buf, b"dolp\0");
    /// ```
    pub fn copy_to(&self, buf: &mut [u8]) -> usize {
        let capacity = match buf.len().checked_sub(1) {
            Some(capacity) => capacity,
            None => return 0,
        };
        let bytes = self.value.as_bytes();
        let copied = bytes.len().min(capacity);
        buf[..copied].copy_from_slice(&bytes[..copied]);
        buf[copied..].iter_mut().for_each(|b| *b = 0);
        copied
    }
}

impl AsRef<str> for Element {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<Element> for String {
    fn from(element: Element) -> Self {
        element.into_value()
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Element").field(&self.value).finish()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::Element;

    #[test]
    fn element_copy_to() {
        let element = Element::new(String::from("gerbil"));

        let mut exact = [0xffu8; 7];
        assert_eq!(element.copy_to(&mut exact), 6);
        assert_eq!(&exact, b"gerbil\0");

        let mut larger = [0xffu8; 10];
        assert_eq!(element.copy_to(&mut larger), 6);
        assert_eq!(&larger, b"gerbil\0\0\0\0");

        let mut smaller = [0xffu8; 3];
        assert_eq!(element.copy_to(&mut smaller), 2);
        assert_eq!(&smaller, b"ge\0");

        let mut single = [0xffu8; 1];
        assert_eq!(element.copy_to(&mut single), 0);
        assert_eq!(&single, b"\0");

        let mut empty: [u8; 0] = [];
        assert_eq!(element.copy_to(&mut empty), 0);
    }

    #[test]
    fn element_into_value() {
        let element = Element::new(String::from("bear"));
        assert_eq!(element.value(), "bear");
        assert_eq!(element.to_string(), "bear");
        assert_eq!(String::from(element), "bear");
    }
}
