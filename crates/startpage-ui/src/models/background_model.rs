use std::ops::Range;

/// Time-of-day range that selects the background image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// 00:00-06:00
    Night,
    /// 06:00-12:00
    Morning,
    /// 12:00-18:00
    Day,
    /// 18:00-00:00
    Evening,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [Bucket::Night, Bucket::Morning, Bucket::Day, Bucket::Evening];

    /// Bucket for a wall-clock hour. Boundary hours belong to the later range.
    ///
    /// `hour` comes from a clock and is always below 24.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => Bucket::Night,
            6..=11 => Bucket::Morning,
            12..=17 => Bucket::Day,
            18..=23 => Bucket::Evening,
            _ => unreachable!("hour {} is outside 0..24", hour),
        }
    }

    /// Half-open hour range covered by this bucket
    pub fn hours(self) -> Range<u32> {
        match self {
            Bucket::Night => 0..6,
            Bucket::Morning => 6..12,
            Bucket::Day => 12..18,
            Bucket::Evening => 18..24,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Bucket::Night => "01.jpg",
            Bucket::Morning => "02.jpg",
            Bucket::Day => "03.jpg",
            Bucket::Evening => "04.jpg",
        }
    }
}

/// Remembers which bucket is on screen so polls only report changes
#[derive(Debug, Clone)]
pub struct BackgroundSelector {
    image_dir: String,
    current: Option<Bucket>,
}

impl BackgroundSelector {
    pub fn new(image_dir: impl Into<String>) -> Self {
        Self {
            image_dir: image_dir.into(),
            current: None,
        }
    }

    pub fn image_path(&self, bucket: Bucket) -> String {
        let dir = self.image_dir.trim_end_matches('/');
        if dir.is_empty() {
            bucket.file_name().to_string()
        } else {
            format!("{}/{}", dir, bucket.file_name())
        }
    }

    pub fn current(&self) -> Option<Bucket> {
        self.current
    }

    /// Image for the first render, unconditionally
    pub fn initial(&mut self, hour: u32) -> String {
        let bucket = Bucket::from_hour(hour);
        self.current = Some(bucket);
        self.image_path(bucket)
    }

    /// New image path if the bucket changed since the last render
    pub fn check(&mut self, hour: u32) -> Option<String> {
        let bucket = Bucket::from_hour(hour);
        if self.current == Some(bucket) {
            return None;
        }
        tracing::debug!("Background range changed to {:?}", bucket);
        self.current = Some(bucket);
        Some(self.image_path(bucket))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_partition_the_day() {
        for hour in 0..24 {
            let matching: Vec<Bucket> = Bucket::ALL
                .into_iter()
                .filter(|b| b.hours().contains(&hour))
                .collect();
            assert_eq!(matching, vec![Bucket::from_hour(hour)], "hour {}", hour);
        }
    }

    #[test]
    fn test_boundaries_belong_to_later_range() {
        assert_eq!(Bucket::from_hour(0), Bucket::Night);
        assert_eq!(Bucket::from_hour(5), Bucket::Night);
        assert_eq!(Bucket::from_hour(6), Bucket::Morning);
        assert_eq!(Bucket::from_hour(12), Bucket::Day);
        assert_eq!(Bucket::from_hour(18), Bucket::Evening);
        assert_eq!(Bucket::from_hour(23), Bucket::Evening);
    }

    #[test]
    #[should_panic(expected = "outside 0..24")]
    fn test_hour_24_is_unreachable() {
        let _ = Bucket::from_hour(24);
    }

    #[test]
    fn test_image_paths() {
        let selector = BackgroundSelector::new("assets/images/");
        assert_eq!(selector.image_path(Bucket::Night), "assets/images/01.jpg");
        assert_eq!(selector.image_path(Bucket::Evening), "assets/images/04.jpg");
        assert_eq!(BackgroundSelector::new("").image_path(Bucket::Day), "03.jpg");
    }

    #[test]
    fn test_check_reports_only_changes() {
        let mut selector = BackgroundSelector::new("img");
        assert_eq!(selector.initial(11), "img/02.jpg");

        assert_eq!(selector.check(11), None);
        assert_eq!(selector.check(12).as_deref(), Some("img/03.jpg"));
        assert_eq!(selector.check(17), None);
        assert_eq!(selector.current(), Some(Bucket::Day));
    }
}
