//!
//! This module defines the [`Vocabulary`] struct, the mapping between tokens and their ids.
//!
//! Ids are dense: a vocabulary of `n` tokens uses exactly the ids `0..n`, and the id of a
//! token is the number of distinct tokens that were seen before it first showed up.
//!
use std::borrow::Borrow;
use std::collections::HashMap as StdHashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use fxhash::FxHashMap as HashMap;
use log::debug;

#[derive(Debug, Clone)]
pub struct Vocabulary<T> {
    tokens: Vec<T>,
    token_to_id: HashMap<T, usize>,
}

impl<T> Vocabulary<T> {
    ///
    /// Get the number of tokens in the vocabulary.
    ///
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    ///
    /// Check if the vocabulary is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    ///
    /// Convert an id to its corresponding token.
    ///
    /// # Arguments:
    /// - `id`: the id to convert
    /// # Returns:
    /// - `Option<&T>`: the token with that id, or None if the id is outside the vocabulary
    ///
    pub fn convert_id_to_token(&self, id: usize) -> Option<&T> {
        self.tokens.get(id)
    }

    /// All tokens, ordered by id.
    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }

    /// Iterate over `(token, id)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.tokens.iter().enumerate().map(|(id, token)| (token, id))
    }
}

impl<T: Eq + Hash + Clone> Vocabulary<T> {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Build a vocabulary from a flat stream of tokens in a single left-to-right pass.
    /// Unseen tokens get the next id, repeated tokens are skipped.
    ///
    pub fn from_tokens<I: IntoIterator<Item = T>>(tokens: I) -> Self {
        let mut vocab = Self::new();
        vocab.extend(tokens);

        debug!("Built vocabulary with {} distinct tokens", vocab.len());
        vocab
    }

    ///
    /// Build a vocabulary from a corpus. The documents are flattened in order,
    /// so ids follow the first occurrence of each token across the whole corpus.
    ///
    /// # Arguments:
    /// - `corpus`: the tokenized documents
    ///
    pub fn from_corpus<D: AsRef<[T]>>(corpus: &[D]) -> Self {
        Self::from_tokens(corpus.iter().flat_map(|doc| doc.as_ref().iter().cloned()))
    }

    ///
    /// Add a token to the vocabulary.
    ///
    /// # Arguments:
    /// - `token`: the token to add
    /// # Returns:
    /// - `usize`: the id of the token. A token that is already present keeps its id.
    ///
    pub fn add_token(&mut self, token: T) -> usize {
        let next_id = self.tokens.len();
        match self.token_to_id.entry(token) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                self.tokens.push(entry.key().clone());
                entry.insert(next_id);
                next_id
            }
        }
    }

    ///
    /// Convert a token to its corresponding id.
    ///
    /// # Arguments:
    /// - `token`: the token to convert
    /// # Returns:
    /// - `Option<usize>`: the id of the token, or None if it isn't in the vocabulary
    ///
    pub fn convert_token_to_id<Q>(&self, token: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.token_to_id.get(token).copied()
    }

    ///
    /// Check if a token exists in the vocabulary.
    ///
    pub fn contains_token<Q>(&self, token: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.token_to_id.contains_key(token)
    }

    ///
    /// Get the token-to-id mapping as a plain standard library map.
    ///
    pub fn to_hash_map(&self) -> StdHashMap<T, usize> {
        self.iter()
            .map(|(token, id)| (token.clone(), id))
            .collect()
    }
}

///
/// Build a vocabulary from a flat sequence of words. Ids are assigned in
/// first-occurrence order starting at zero.
///
pub fn word_index<T, I>(words: I) -> Vocabulary<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    Vocabulary::from_tokens(words)
}

impl<T> Default for Vocabulary<T> {
    fn default() -> Self {
        Vocabulary {
            tokens: Vec::new(),
            token_to_id: HashMap::default(),
        }
    }
}

// the id map is derived from `tokens`, so comparing the ordered tokens is enough
impl<T: PartialEq> PartialEq for Vocabulary<T> {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl<T: Eq> Eq for Vocabulary<T> {}

impl<T: Eq + Hash + Clone> Extend<T> for Vocabulary<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for token in iter {
            self.add_token(token);
        }
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for Vocabulary<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vocabulary::from_tokens(iter)
    }
}
