/// produces: [ linear_interpol(start, end, i/(count - 1)) | i <- 0..count ]
/// (includes both "start" and "end"; a single point is just "start")
///
/// linear_interpol(a, b, p) = (1 - p) * a + p * b
#[derive(Clone, Debug)]
pub struct Linspace {
    current: u64,
    current_back: u64,
    count: u64,
    start: f64,
    end: f64,
}

impl Linspace {
    pub fn new(start: f64, end: f64, count: usize) -> Self {
        Linspace {
            current: 0,
            current_back: count as u64,
            count: count as u64,
            start,
            end,
        }
    }

    /// spacing between two consecutive points, None with less than two points
    pub fn step(&self) -> Option<f64> {
        if self.count < 2 {
            None
        } else {
            Some((self.end - self.start) / (self.count - 1) as f64)
        }
    }

    pub fn length(&self) -> u64 {
        self.current_back - self.current
    }

    fn at(&self, pos: u64) -> f64 {
        if self.count < 2 {
            return self.start;
        }
        if pos == self.count - 1 {
            return self.end;
        }
        let f_pos = pos as f64 / (self.count - 1) as f64;
        (1. - f_pos) * self.start + f_pos * self.end
    }

    fn usize_len(&self) -> usize {
        self.length() as usize
    }
}

impl Iterator for Linspace {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.current_back {
            return None;
        }
        let result = self.at(self.current);
        self.current += 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let l = self.usize_len();
        (l, Some(l))
    }

    fn count(self) -> usize {
        self.usize_len()
    }
}

impl DoubleEndedIterator for Linspace {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current >= self.current_back {
            return None;
        }
        self.current_back -= 1;
        let result = self.at(self.current_back);
        Some(result)
    }
}

impl ExactSizeIterator for Linspace {
    fn len(&self) -> usize {
        self.usize_len()
    }
}

/// `count` evenly spaced values over [start, end], both ends included
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    Linspace::new(start, end, count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_axis_of_five() {
        let x = linspace(0., 1., 5);
        assert_eq!(x, vec![0., 0.25, 0.5, 0.75, 1.]);
    }

    #[test]
    fn test_even_spacing() {
        let n = 101;
        let x = linspace(0., 1., n);
        assert_eq!(x.len(), n);
        assert_eq!(x[0], 0.);
        assert_eq!(x[n - 1], 1.);
        for pair in x.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 0.01, epsilon = 1e-12);
        }
        assert_relative_eq!(Linspace::new(0., 1., n).step().unwrap(), 0.01);
    }

    #[test]
    fn test_single_point_has_no_step() {
        let it = Linspace::new(0., 1., 1);
        assert_eq!(it.step(), None);
        assert_eq!(it.collect::<Vec<_>>(), vec![0.]);
    }

    #[test]
    fn test_empty() {
        assert!(linspace(0., 1., 0).is_empty());
    }

    #[test]
    fn test_double_ended() {
        let mut it = Linspace::new(-1., 1., 3);
        assert_eq!(it.len(), 3);
        assert_eq!(it.next_back(), Some(1.));
        assert_eq!(it.next(), Some(-1.));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next_back(), Some(0.));
        assert_eq!(it.next(), None);
    }
}
