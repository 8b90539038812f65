/// Single-open FAQ accordion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    #[inline]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index` (closing any other item) or close it if already open.
    /// Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_item_open_at_a_time() {
        let mut a = Accordion::new(3);
        a.toggle(0);
        a.toggle(2);
        assert!(!a.is_open(0));
        assert!(a.is_open(2));
    }

    #[test]
    fn toggle_twice_closes() {
        let mut a = Accordion::new(2);
        a.toggle(1);
        a.toggle(1);
        assert_eq!(a.open_index(), None);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut a = Accordion::new(2);
        a.toggle(0);
        a.toggle(5);
        assert_eq!(a.open_index(), Some(0));
    }
}
