use std::fmt;

use clap::ValueEnum;
use rand::Rng;

/// How a word's weight is derived from its whitespace-separated token count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Weighting
{
    #[default]
    Fixed,
    /// Shorter phrases come up first more often.
    #[value(alias = "short")]
    InverseLength,
    /// Longer phrases come up first more often.
    #[value(alias = "long")]
    Length,
}

impl Weighting
{
    pub fn weight_of(self, text: &str) -> f64
    {
        let tokens = token_count(text) as f64;
        match self {
            Weighting::Fixed => 1.0,
            Weighting::InverseLength => 1.0 / tokens,
            Weighting::Length => tokens,
        }
    }
}

impl fmt::Display for Weighting
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let name = match self {
            Weighting::Fixed => "fixed",
            Weighting::InverseLength => "inverse-length",
            Weighting::Length => "length",
        };
        f.write_str(name)
    }
}

// A blank string still counts as one token so inverse weights stay finite.
fn token_count(text: &str) -> usize
{
    text.split_whitespace().count().max(1)
}

struct Weighted<T>
{
    item: T,
    weight: f64,
}

/// Weighted draw without replacement.
///
/// Every call to [`WeightedDeck::draw`] picks one of the remaining items with
/// probability proportional to its weight and removes it. After `len` draws
/// the deck is empty and stays empty.
pub struct WeightedDeck<T, R>
{
    remaining: Vec<Weighted<T>>,
    total_weight: f64,
    rng: R,
}

impl<T, R> WeightedDeck<T, R>
where
    T: AsRef<str>,
    R: Rng,
{
    pub fn new(items: impl IntoIterator<Item = T>, weighting: Weighting, rng: R) -> Self
    {
        Self::with_weights(
            items.into_iter().map(|item| {
                let weight = weighting.weight_of(item.as_ref());
                (item, weight)
            }),
            rng,
        )
    }
}

impl<T, R> WeightedDeck<T, R>
where
    R: Rng,
{
    pub fn with_weights(items: impl IntoIterator<Item = (T, f64)>, rng: R) -> Self
    {
        let remaining: Vec<Weighted<T>> = items
            .into_iter()
            .map(|(item, weight)| Weighted {
                item,
                weight: if weight.is_finite() { weight.max(0.0) } else { 0.0 },
            })
            .collect();
        let total_weight = remaining.iter().map(|entry| entry.weight).sum();
        Self {
            remaining,
            total_weight,
            rng,
        }
    }

    pub fn draw(&mut self) -> Option<T>
    {
        if self.remaining.is_empty() {
            return None;
        }

        let sample = if self.total_weight > 0.0 {
            self.rng.gen_range(0.0..self.total_weight)
        } else {
            0.0
        };

        let mut acc = 0.0;
        let mut picked = self.remaining.len() - 1;
        for (idx, entry) in self.remaining.iter().enumerate() {
            acc += entry.weight;
            if acc > sample {
                picked = idx;
                break;
            }
        }

        let entry = self.remaining.remove(picked);
        self.total_weight -= entry.weight;
        if self.remaining.is_empty() {
            self.total_weight = 0.0;
        }
        Some(entry.item)
    }

    pub fn len(&self) -> usize
    {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.remaining.is_empty()
    }

    pub fn total_weight(&self) -> f64
    {
        self.total_weight
    }

    pub fn weights(&self) -> impl Iterator<Item = f64> + '_
    {
        self.remaining.iter().map(|entry| entry.weight)
    }
}

impl<T, R> Iterator for WeightedDeck<T, R>
where
    R: Rng,
{
    type Item = T;

    fn next(&mut self) -> Option<T>
    {
        self.draw()
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        (self.remaining.len(), Some(self.remaining.len()))
    }
}
