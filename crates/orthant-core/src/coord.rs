//! The elastic-dimension [`Coord`] value type.

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Index, Neg, Sub, SubAssign};

static ZERO: i64 = 0;

/// A position or displacement on the lattice.
///
/// A coordinate stores one signed component per dimension it was built
/// with, but its dimensionality is elastic: reading past the stored
/// components yields `0`, and two coordinates of different lengths
/// compare, hash, order, and combine as if the shorter one were padded
/// with zeros. `Coord::from([1, 2])`, `Coord::from([1, 2, 0])` and
/// `Coord::from([1, 2, 0, 0])` are all equal and hash identically.
///
/// Uses `SmallVec<[i64; 4]>` to avoid heap allocation up to four
/// dimensions; five- and six-axis coordinates spill to the heap.
#[derive(Clone, Debug, Default)]
pub struct Coord(SmallVec<[i64; 4]>);

impl Coord {
    /// Build a coordinate from its components.
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self(values.into_iter().collect())
    }

    /// The zero-dimensional origin (equal to the origin of every dimension).
    pub fn origin() -> Self {
        Self(SmallVec::new())
    }

    /// A coordinate of `dimension` zero components.
    pub fn zeros(dimension: usize) -> Self {
        Self(SmallVec::from_elem(0, dimension))
    }

    /// Number of stored components.
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    /// Component `index`, or `0` past the stored components.
    pub fn get(&self, index: usize) -> i64 {
        self.0.get(index).copied().unwrap_or(0)
    }

    /// First component.
    pub fn x(&self) -> i64 {
        self.get(0)
    }

    /// Second component.
    pub fn y(&self) -> i64 {
        self.get(1)
    }

    /// Third component.
    pub fn z(&self) -> i64 {
        self.get(2)
    }

    /// `(x, y)` pair.
    pub fn xy(&self) -> (i64, i64) {
        (self.x(), self.y())
    }

    /// `(x, y, z)` triple.
    pub fn xyz(&self) -> (i64, i64, i64) {
        (self.x(), self.y(), self.z())
    }

    /// Stored components, including any trailing zeros.
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Stored components with trailing zeros removed.
    ///
    /// This is the canonical form used for equality, hashing and ordering.
    pub fn trimmed(&self) -> &[i64] {
        let end = self.0.iter().rposition(|&v| v != 0).map_or(0, |i| i + 1);
        &self.0[..end]
    }

    /// Returns `true` if every component is zero.
    pub fn is_origin(&self) -> bool {
        self.0.iter().all(|&v| v == 0)
    }

    /// Sum of absolute components (L1 norm), saturating at `u64::MAX`.
    pub fn manhattan(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, v| acc.saturating_add(v.unsigned_abs()))
    }

    /// Largest absolute component (L-inf norm).
    pub fn chebyshev(&self) -> u64 {
        self.0.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0)
    }

    /// Combine two coordinates component-wise over the longer of the two.
    fn zip_with(&self, other: &Self, f: impl Fn(i64, i64) -> i64) -> Self {
        let dim = self.dimension().max(other.dimension());
        Self((0..dim).map(|i| f(self.get(i), other.get(i))).collect())
    }
}

impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        self.trimmed() == other.trimmed()
    }
}

impl Eq for Coord {}

impl Hash for Coord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.trimmed().hash(state);
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        let dim = self.dimension().max(other.dimension());
        (0..dim)
            .map(|i| self.get(i).cmp(&other.get(i)))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Index<usize> for Coord {
    type Output = i64;

    /// Component `index`; indices past the stored components read as `0`.
    fn index(&self, index: usize) -> &i64 {
        self.0.get(index).unwrap_or(&ZERO)
    }
}

impl Add<&Coord> for &Coord {
    type Output = Coord;

    fn add(self, rhs: &Coord) -> Coord {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub<&Coord> for &Coord {
    type Output = Coord;

    fn sub(self, rhs: &Coord) -> Coord {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        &self + &rhs
    }
}

impl Add<&Coord> for Coord {
    type Output = Coord;

    fn add(self, rhs: &Coord) -> Coord {
        &self + rhs
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        &self - &rhs
    }
}

impl Sub<&Coord> for Coord {
    type Output = Coord;

    fn sub(self, rhs: &Coord) -> Coord {
        &self - rhs
    }
}

impl AddAssign<&Coord> for Coord {
    fn add_assign(&mut self, rhs: &Coord) {
        *self = &*self + rhs;
    }
}

impl AddAssign for Coord {
    fn add_assign(&mut self, rhs: Coord) {
        *self += &rhs;
    }
}

impl SubAssign<&Coord> for Coord {
    fn sub_assign(&mut self, rhs: &Coord) {
        *self = &*self - rhs;
    }
}

impl SubAssign for Coord {
    fn sub_assign(&mut self, rhs: Coord) {
        *self -= &rhs;
    }
}

impl Neg for &Coord {
    type Output = Coord;

    fn neg(self) -> Coord {
        Coord(self.0.iter().map(|v| -v).collect())
    }
}

impl Neg for Coord {
    type Output = Coord;

    fn neg(self) -> Coord {
        -&self
    }
}

impl<const N: usize> From<[i64; N]> for Coord {
    fn from(values: [i64; N]) -> Self {
        Self(SmallVec::from_slice(&values))
    }
}

impl From<&[i64]> for Coord {
    fn from(values: &[i64]) -> Self {
        Self(SmallVec::from_slice(values))
    }
}

impl From<Vec<i64>> for Coord {
    fn from(values: Vec<i64>) -> Self {
        Self(SmallVec::from_vec(values))
    }
}

impl FromIterator<i64> for Coord {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(")")
    }
}
