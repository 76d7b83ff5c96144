// mapping-level sequencing
//turn {k: Wrapped<v>} into Wrapped<{k: v}>, preserving keys and insertion order
/*

1. keys must stay exactly the input key set, none added or dropped

2. key-enumeration order = insertion order (IndexMap), and it decides which
   failure wins for short-circuiting wrappers / in which order errors
   accumulate for accumulating ones

3. empty input -> lift(empty mapping)

4. pure: no side effects, failures are values, nothing is thrown

*/
use std::hash::Hash;

use indexmap::IndexMap;

use crate::core::applicative::Applicative;
use crate::core::result::ResultSeq;

/// Sequence a mapping of wrapped values through any [`Applicative`].
///
/// Splits the mapping into its ordered key and value sequences, sequences the
/// values through `A`, then zips the keys back onto the unwrapped values
/// inside the wrapper.
pub fn sequence_mapping<A, K, T>(obj: IndexMap<K, A::Wrapped<T>>) -> A::Wrapped<IndexMap<K, T>>
where
    A: Applicative,
    K: Hash + Eq,
{
    let (keys, values): (Vec<K>, Vec<A::Wrapped<T>>) = obj.into_iter().unzip();

    //keys and values came from the same pairs, so zip cannot mismatch
    A::map(A::sequence(values), |unwrapped| {
        keys.into_iter().zip(unwrapped).collect()
    })
}

/// Result specialization: the error of the first failing value in key order
/// is the one returned.
pub fn sequence_result_mapping<K, T, E>(
    obj: IndexMap<K, Result<T, E>>,
) -> Result<IndexMap<K, T>, E>
where
    K: Hash + Eq,
{
    sequence_mapping::<ResultSeq<E>, K, T>(obj)
}
