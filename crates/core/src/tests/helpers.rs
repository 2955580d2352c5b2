// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Duration, TimeZone, Utc};
use linha_domain::{Event, EventId, EventType, UserId};

pub fn shift_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 19, 0, 0).unwrap()
}

pub fn create_test_event(max_capacity: u32) -> Event {
    let mut event = Event::new(
        String::from("Turno"),
        String::from("Evening helpline shift"),
        EventType::Shift,
        shift_start(),
        shift_start() + Duration::hours(2) + Duration::minutes(30),
        max_capacity,
        Some(UserId::new("coord-1")),
    );
    event.event_id = Some(EventId::new("evt-1"));
    event
}
