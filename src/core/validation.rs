// accumulating validation wrapper
//like Result, but sequence collects every failure instead of stopping at the first
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::core::applicative::Applicative;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Validation<T, E> {
    Valid(T),
    Invalid(Vec<E>),
}

impl<T, E> Validation<T, E> {
    pub fn valid(value: T) -> Self {
        Validation::Valid(value)
    }

    pub fn invalid(error: E) -> Self {
        Validation::Invalid(vec![error])
    }

    //an empty iterator still produces Invalid: zero recorded payloads, but
    //the value counts as a failure everywhere (sequence, into_result)
    pub fn invalid_many(errors: impl IntoIterator<Item = E>) -> Self {
        Validation::Invalid(errors.into_iter().collect())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validation<U, E> {
        match self {
            Validation::Valid(v) => Validation::Valid(f(v)),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    //accumulated errors in the order they were seen; empty slice for Valid
    pub fn errors(&self) -> &[E] {
        match self {
            Validation::Valid(_) => &[],
            Validation::Invalid(errors) => errors,
        }
    }

    /// Collapse to a Result, surfacing the accumulated errors.
    ///
    /// The error vector can be empty when the value was built with
    /// `invalid_many` over an empty iterator; Invalid still maps to `Err`.
    pub fn into_result(self) -> Result<T, Vec<E>> {
        match self {
            Validation::Valid(v) => Ok(v),
            Validation::Invalid(errors) => Err(errors),
        }
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(v) => Validation::Valid(v),
            Err(e) => Validation::invalid(e),
        }
    }
}

/// Marker tying [`Applicative`] to [`Validation`].
///
/// `sequence` visits every element and accumulates all failure payloads in
/// input order, so sequencing a mapping through it reports every invalid
/// key at once rather than only the first.
pub struct ValidationSeq<E>(PhantomData<E>);

impl<E> Applicative for ValidationSeq<E> {
    type Wrapped<T> = Validation<T, E>;

    fn lift<T>(value: T) -> Validation<T, E> {
        Validation::Valid(value)
    }

    fn map<T, U>(wrapped: Validation<T, E>, f: impl FnOnce(T) -> U) -> Validation<U, E> {
        wrapped.map(f)
    }

    fn sequence<T>(items: impl IntoIterator<Item = Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut values = Vec::new();
        let mut errors: Vec<E> = Vec::new();
        //tracked separately from errors: an Invalid with zero payloads must
        //still fail the whole sequence, never leak a short Valid vector
        let mut failed = false;

        for item in items {
            match item {
                //values gathered so far are dead weight once anything failed
                Validation::Valid(v) if !failed => values.push(v),
                Validation::Valid(_) => {}
                Validation::Invalid(es) => {
                    failed = true;
                    errors.extend(es);
                }
            }
        }

        if failed {
            Validation::Invalid(errors)
        } else {
            Validation::Valid(values)
        }
    }
}
