//! Sequence transform helper.
//!
//! [`transform`] applies a caller-supplied function to every element of a
//! slice, producing a freshly allocated `Vec`. The input is borrowed
//! immutably for the duration of the call and is never modified.

/// Apply `f` to every element of `input`, collecting the results into a new
/// `Vec` of the same length.
///
/// Elements are visited in ascending index order and `f` is invoked exactly
/// once per element, so side effects in `f` execute once per element in
/// input order. An empty input yields an empty output without invoking `f`.
///
/// The output is always a distinct, newly allocated container, even when it
/// is element-wise equal to the input. A panic raised by `f` propagates to
/// the caller unmodified.
pub fn transform<T, U, F>(input: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut output = Vec::with_capacity(input.len());
    for item in input {
        output.push(f(item));
    }
    output
}
