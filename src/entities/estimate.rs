use chrono::Duration;
use serde::{Serialize, Serializer};

/// Outcome of a point update.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Estimate {
    pub order_id: String,
    /// `None` while one of the two points is still unknown.
    #[serde(rename = "travel_time_secs", serialize_with = "serialize_seconds")]
    pub travel_time: Option<Duration>,
    pub published: bool,
}

impl Estimate {
    pub fn unavailable(order_id: &str) -> Self {
        Self {
            order_id: order_id.into(),
            travel_time: None,
            published: false,
        }
    }
}

fn serialize_seconds<S: Serializer>(
    travel_time: &Option<Duration>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match travel_time {
        Some(duration) => serializer.serialize_some(&duration.num_seconds()),
        None => serializer.serialize_none(),
    }
}

#[test]
fn estimate_serializes_seconds() {
    let estimate = Estimate {
        order_id: "A1".into(),
        travel_time: Some(Duration::seconds(600)),
        published: true,
    };

    assert_eq!(
        serde_json::to_value(&estimate).unwrap(),
        serde_json::json!({ "order_id": "A1", "travel_time_secs": 600, "published": true })
    );

    assert_eq!(
        serde_json::to_value(&Estimate::unavailable("A2")).unwrap(),
        serde_json::json!({ "order_id": "A2", "travel_time_secs": null, "published": false })
    );
}
