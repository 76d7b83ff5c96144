// Result instance: first failure wins
use std::marker::PhantomData;

use crate::core::applicative::Applicative;

/// Marker tying [`Applicative`] to `std::result::Result<T, E>`.
///
/// `sequence` is left-to-right and short-circuits on the first `Err`, which
/// is the guaranteed contract of the Result-specialized sequencer.
pub struct ResultSeq<E>(PhantomData<E>);

impl<E> Applicative for ResultSeq<E> {
    type Wrapped<T> = Result<T, E>;

    fn lift<T>(value: T) -> Result<T, E> {
        Ok(value)
    }

    fn map<T, U>(wrapped: Result<T, E>, f: impl FnOnce(T) -> U) -> Result<U, E> {
        wrapped.map(f)
    }

    fn sequence<T>(items: impl IntoIterator<Item = Result<T, E>>) -> Result<Vec<T>, E> {
        //collect on Result stops at the first Err and drops the rest
        items.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_all_ok_keeps_order() {
        let out = ResultSeq::<String>::sequence(vec![Ok(1), Ok(2), Ok(3)]);
        assert_eq!(out.unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn sequence_surfaces_first_err_only() {
        let items: Vec<Result<u32, &str>> = vec![Ok(1), Err("first"), Err("second")];
        assert_eq!(ResultSeq::sequence(items).unwrap_err(), "first");
    }

    #[test]
    fn sequence_empty_is_lift_of_empty() {
        let out: Result<Vec<u32>, String> = ResultSeq::sequence(Vec::new());
        assert_eq!(out.unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn map_passes_failure_through_untouched() {
        let err: Result<u32, &str> = Err("bad");
        assert_eq!(ResultSeq::map(err, |v| v + 1).unwrap_err(), "bad");
        assert_eq!(ResultSeq::map(Ok::<_, &str>(2), |v| v + 1).unwrap(), 3);
    }
}
