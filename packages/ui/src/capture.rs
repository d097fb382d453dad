//! Placeholder OCR/QR capture.
//!
//! No recognition happens anywhere in the app: "scanning" waits a fixed
//! delay and then reports a uniformly random plate that is already
//! registered, or a demo plate when the list is empty.

use std::time::Duration;

use api::Profile;
use rand::Rng;

/// Plate reported when nothing is registered yet.
pub const FALLBACK_PLATE: &str = "DEMO123";

/// Delay before a camera capture "recognizes" a plate.
pub const CAMERA_SCAN_DELAY: Duration = Duration::from_millis(1500);

/// Delay before an uploaded photo "recognizes" a plate.
pub const UPLOAD_SCAN_DELAY: Duration = Duration::from_millis(2000);

/// Pick the plate a simulated scan will "find".
pub fn pick_simulated_plate<R: Rng>(profiles: &[Profile], rng: &mut R) -> String {
    if profiles.is_empty() {
        return FALLBACK_PLATE.to_string();
    }
    profiles[rng.gen_range(0..profiles.len())]
        .plate_number
        .clone()
}

/// Probe for camera access in the webview. Resolves to `false` when the
/// permission is denied or no camera API exists.
pub async fn probe_camera() -> bool {
    let mut eval = dioxus::document::eval(
        r#"
        try {
            if (!navigator.mediaDevices || !navigator.mediaDevices.getUserMedia) {
                dioxus.send(false);
            } else {
                const stream = await navigator.mediaDevices.getUserMedia({ video: true });
                stream.getTracks().forEach((track) => track.stop());
                dioxus.send(true);
            }
        } catch (err) {
            dioxus.send(false);
        }
        "#,
    );
    eval.recv::<bool>().await.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn profile(plate: &str) -> Profile {
        Profile {
            id: format!("CA_{plate}"),
            plate_number: plate.to_string(),
            first_name: "Sam".to_string(),
            state: "California".to_string(),
            description: None,
            alias: None,
            created_at: None,
        }
    }

    #[test]
    fn test_empty_list_falls_back_to_demo_plate() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_simulated_plate(&[], &mut rng), FALLBACK_PLATE);
    }

    #[test]
    fn test_pick_comes_from_the_list() {
        let profiles: Vec<Profile> =
            ["ABC123", "XYZ789", "MYPLATE"].iter().map(|p| profile(p)).collect();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let picked = pick_simulated_plate(&profiles, &mut rng);
            assert!(profiles.iter().any(|p| p.plate_number == picked));
        }
    }
}
