/// Contiguous half-open range of image rows assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    /// First row of the band.
    pub start: u32,
    /// Row after the last row of the band.
    pub end: u32,
}

impl RowBand {
    /// Count of rows in the band.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits `height` rows into `count` contiguous bands.
///
/// Every band gets `height / count` rows and the last band
/// additionally takes the `height % count` remainder rows. The bands
/// are disjoint and together cover all rows of the image.
pub(crate) fn split_rows(height: u32, count: u32) -> Vec<RowBand> {
    debug_assert!(count >= 1 && count <= height);
    let rows_per_band = height / count;
    (0..count)
        .map(|i| RowBand {
            start: i * rows_per_band,
            end: if i == count - 1 {
                height
            } else {
                (i + 1) * rows_per_band
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn assert_exact_partition(height: u32, count: u32) {
        let bands = split_rows(height, count);
        assert_eq!(bands.len() as u32, count);
        assert_eq!(bands[0].start, 0);
        assert_eq!(bands.last().unwrap().end, height);
        for (prev, next) in bands.iter().tuple_windows() {
            assert_eq!(prev.end, next.start, "height={} count={}", height, count);
        }
        let sum_rows = bands.iter().map(|b| b.len()).sum::<u32>();
        assert_eq!(sum_rows, height);
    }

    #[test]
    fn bands_partition_rows_exactly() {
        for height in 1..64 {
            for count in 1..=height {
                assert_exact_partition(height, count);
            }
        }
    }

    #[test]
    fn last_band_absorbs_remainder_rows() {
        let bands = split_rows(10, 4);
        assert_eq!(
            bands,
            vec![
                RowBand { start: 0, end: 2 },
                RowBand { start: 2, end: 4 },
                RowBand { start: 4, end: 6 },
                RowBand { start: 6, end: 10 },
            ]
        );
    }

    #[test]
    fn one_band_covers_whole_image() {
        assert_eq!(split_rows(7, 1), vec![RowBand { start: 0, end: 7 }]);
    }

    #[test]
    fn one_row_per_band() {
        let bands = split_rows(4, 4);
        assert!(bands.iter().all(|b| b.len() == 1));
    }
}
