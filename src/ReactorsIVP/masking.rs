use crate::Mechanism::species::NSP;

/// permutation of species for cache-friendly layouts: position i of the masked vector
/// holds species MASK[i]
pub const MASK: [usize; NSP] = [0, 1, 2, 3, 4, 5, 6, 7, 9, 10, 11, 12, 8];

/// natural order -> masked order, in place
pub fn apply_mask<T: Copy>(y_specs: &mut [T; NSP]) {
    let temp = *y_specs;
    for (i, &m) in MASK.iter().enumerate() {
        y_specs[i] = temp[m];
    }
}

/// masked order -> natural order, in place
pub fn apply_reverse_mask<T: Copy>(y_specs: &mut [T; NSP]) {
    let temp = *y_specs;
    for (i, &m) in MASK.iter().enumerate() {
        y_specs[m] = temp[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_moves_argon_to_the_end() {
        let mut v: [usize; NSP] = std::array::from_fn(|i| i);
        apply_mask(&mut v);
        assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7, 9, 10, 11, 12, 8]);
        apply_reverse_mask(&mut v);
        assert_eq!(v, std::array::from_fn(|i| i));
    }

    #[test]
    fn test_mask_and_reverse_are_inverse() {
        let original: [f64; NSP] = std::array::from_fn(|i| (i as f64 + 0.5).sqrt());
        let mut v = original;
        apply_reverse_mask(&mut v);
        apply_mask(&mut v);
        assert_eq!(v, original);
        apply_mask(&mut v);
        apply_reverse_mask(&mut v);
        assert_eq!(v, original);
    }
}
