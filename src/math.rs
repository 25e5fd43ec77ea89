use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct C {
    pub re: f64,
    pub im: f64,
}

impl C {
    pub fn new(re: f64, im: f64) -> Self {
        C { re, im }
    }

    pub fn abs_sq(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Modulus, computed with `hypot` so large orbits do not overflow early.
    pub fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }

    pub fn add(&self, other: C) -> C {
        C::new(self.re + other.re, self.im + other.im)
    }

    pub fn mul(&self, other: C) -> C {
        C::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re
        )
    }

    pub fn square(&self) -> C {
        self.mul(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_of_i_is_minus_one() {
        let i = C::new(0.0, 1.0);
        assert_eq!(i.square(), C::new(-1.0, 0.0));
    }

    #[test]
    fn norm_matches_pythagoras() {
        assert_eq!(C::new(3.0, 4.0).norm(), 5.0);
        assert_eq!(C::new(3.0, 4.0).abs_sq(), 25.0);
    }

    #[test]
    fn add_is_componentwise() {
        let z = C::new(1.5, -2.0).add(C::new(-0.5, 0.25));
        assert_eq!(z, C::new(1.0, -1.75));
    }
}
