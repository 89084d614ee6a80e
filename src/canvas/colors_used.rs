use std::collections::HashSet;

use crate::color::Rgb;

/// The distinct colors a canvas has been painted with, in first-use order.
#[derive(Default, PartialEq)]
pub struct ColorsUsed {
    vector: Vec<Rgb>,
    set: HashSet<Rgb>,
}

impl std::fmt::Debug for ColorsUsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.vector.iter().map(|c| c.to_string()))
            .finish()
    }
}

impl ColorsUsed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, color: Rgb) {
        if self.set.insert(color) {
            self.vector.push(color);
        }
    }

    pub fn contains(&self, color: Rgb) -> bool {
        self.set.contains(&color)
    }

    pub fn as_slice(&self) -> &[Rgb] {
        self.vector.as_slice()
    }

    pub fn iter(&self) -> <&'_ Self as IntoIterator>::IntoIter {
        self.into_iter()
    }
}

impl<'a> IntoIterator for &'a ColorsUsed {
    type Item = Rgb;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Rgb>>;
    fn into_iter(self) -> Self::IntoIter {
        self.vector.iter().copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_first_use_order() {
        let mut used = ColorsUsed::new();
        used.insert(Rgb::WHITE);
        used.insert(Rgb::BLACK);
        used.insert(Rgb::WHITE);
        assert_eq!(used.as_slice(), &[Rgb::WHITE, Rgb::BLACK]);
        assert!(used.contains(Rgb::BLACK));
        assert!(!used.contains(Rgb::BACKGROUND));
        assert_eq!(format!("{:?}", used), r##"["#ffffff", "#000000"]"##);
    }
}
