// applicative capability seam
//any wrapper type the sequencer can run through: needs lift + map + sequence
/*

lift: wrap a raw value in the success case, never fails

map: transform the success payload, leave failures untouched

sequence: Vec of wrapped -> wrapped Vec, consumed left to right;
          the failure-combination rule is the implementor's own
          (Result short-circuits on the first failure, Validation accumulates)

sequence of nothing must equal lift(vec![])

*/

pub trait Applicative {
    type Wrapped<T>;

    //wrap a value in the success case
    fn lift<T>(value: T) -> Self::Wrapped<T>;

    //functor map over the success case, no-op on failure
    fn map<T, U>(wrapped: Self::Wrapped<T>, f: impl FnOnce(T) -> U) -> Self::Wrapped<U>;

    /// Turn an ordered collection of wrapped values into a wrapped ordered
    /// collection. Items are consumed strictly left to right, so whichever
    /// failure "wins" (or in which order failures accumulate) is determined
    /// by input order.
    fn sequence<T>(items: impl IntoIterator<Item = Self::Wrapped<T>>) -> Self::Wrapped<Vec<T>>;
}
