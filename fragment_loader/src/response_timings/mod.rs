use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
pub struct ResponseTimings {
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub name: String,
}

impl ResponseTimings {
    pub fn new(name: String) -> ResponseTimings {
        ResponseTimings {
            start_time: Utc::now(),
            end_time: None,
            name,
        }
    }

    pub fn finish(&mut self) {
        self.end_time = Some(Utc::now());
    }

    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end_time| end_time - self.start_time)
    }
}
