//! Sample applications for `job-tracker dev`.

use crate::types::{Application, Status};

pub fn sample_applications() -> Vec<Application> {
    vec![
        Application {
            id: 1_704_931_200_000,
            company: "Globex".to_string(),
            role: "Data Analyst".to_string(),
            status: Status::Interview,
            date: "2024-01-11".to_string(),
            notes: "Phone screen with the hiring manager".to_string(),
        },
        Application {
            id: 1_704_844_800_000,
            company: "Initech".to_string(),
            role: "Backend Engineer".to_string(),
            status: Status::Rejected,
            date: "2024-01-10".to_string(),
            notes: String::new(),
        },
        Application {
            id: 1_704_758_400_000,
            company: "Acme".to_string(),
            role: "Software Engineer".to_string(),
            status: Status::Offer,
            date: "2024-01-09".to_string(),
            notes: "Referral from a former colleague\nNegotiate start date".to_string(),
        },
        Application {
            id: 1_704_672_000_000,
            company: "Umbrella".to_string(),
            role: "Platform Engineer".to_string(),
            status: Status::Applied,
            date: "2024-01-08".to_string(),
            notes: String::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_newest_first_with_unique_ids() {
        let samples = sample_applications();
        assert!(samples.windows(2).all(|w| w[0].id > w[1].id));
    }
}
