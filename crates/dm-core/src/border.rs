use serde::{Deserialize, Serialize};

/// How neighborhood reads outside the image are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum BorderMode<T> {
    #[default]
    Clamp,
    Constant(T),
    Wrap,
}

/// Maps a possibly out-of-range index into `[0, len)`.
///
/// Returns `None` for `Constant` when `i` is outside, and for empty axes.
pub fn map_index<T>(i: isize, len: usize, mode: &BorderMode<T>) -> Option<usize> {
    if len == 0 {
        return None;
    }

    match mode {
        BorderMode::Constant(_) => {
            if i < 0 || i >= len as isize {
                None
            } else {
                Some(i as usize)
            }
        }
        BorderMode::Clamp => {
            if i < 0 {
                Some(0)
            } else {
                Some((i as usize).min(len - 1))
            }
        }
        BorderMode::Wrap => Some(i.rem_euclid(len as isize) as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::{BorderMode, map_index};

    #[test]
    fn clamp_mapping_handles_negative_and_overflow() {
        let mode = BorderMode::<u8>::Clamp;

        assert_eq!(map_index(-3, 5, &mode), Some(0));
        assert_eq!(map_index(-1, 5, &mode), Some(0));
        assert_eq!(map_index(0, 5, &mode), Some(0));
        assert_eq!(map_index(4, 5, &mode), Some(4));
        assert_eq!(map_index(5, 5, &mode), Some(4));
        assert_eq!(map_index(99, 5, &mode), Some(4));
    }

    #[test]
    fn wrap_is_periodic() {
        let mode = BorderMode::<u8>::Wrap;

        let cases = [(-6, 4), (-5, 0), (-1, 4), (0, 0), (4, 4), (5, 0), (7, 2), (11, 1)];
        for (i, expected) in cases {
            assert_eq!(map_index(i, 5, &mode), Some(expected));
        }
        for i in -4..=4 {
            assert_eq!(map_index(i, 1, &mode), Some(0));
        }
    }

    #[test]
    fn constant_only_maps_in_range() {
        let mode = BorderMode::Constant(0u8);

        assert_eq!(map_index(-1, 3, &mode), None);
        assert_eq!(map_index(3, 3, &mode), None);
        assert_eq!(map_index(2, 3, &mode), Some(2));
    }

    #[test]
    fn empty_axis_never_maps() {
        assert_eq!(map_index(0, 0, &BorderMode::<u8>::Clamp), None);
        assert_eq!(map_index(0, 0, &BorderMode::<u8>::Wrap), None);
    }
}
