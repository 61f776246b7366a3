use core::{iter::FusedIterator, slice};

use super::JsValue;

/// Iterator returned by [`JsValue::as_list`].
///
/// Yields the elements of an array, or a non-array value once.
#[derive(Debug, Clone)]
pub struct AsList<'a>(State<'a>);

#[derive(Debug, Clone)]
enum State<'a> {
    Empty,
    One(&'a JsValue),
    Many(slice::Iter<'a, JsValue>),
}

impl<'a> AsList<'a> {
    pub(crate) fn one(value: &'a JsValue) -> Self {
        AsList(State::One(value))
    }

    pub(crate) fn many(values: &'a [JsValue]) -> Self {
        AsList(State::Many(values.iter()))
    }
}

impl<'a> Iterator for AsList<'a> {
    type Item = &'a JsValue;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.0, State::Empty) {
            State::Empty => None,
            State::One(value) => Some(value),
            State::Many(mut iter) => {
                let next = iter.next();
                if next.is_some() {
                    self.0 = State::Many(iter);
                }
                next
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.0 {
            State::Empty => (0, Some(0)),
            State::One(_) => (1, Some(1)),
            State::Many(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for AsList<'_> {}

impl FusedIterator for AsList<'_> {}
