use chrono::{NaiveDate, Utc};
use rand::{Rng, seq::SliceRandom};
use uuid::Uuid;

use crate::domain::{
    challenge::entities::{Challenge, ChallengeType, DailyChallenge},
    common::generate_uuid_v7,
};

pub const DAILY_PICKS: usize = 3;

pub struct DailyTemplate {
    pub key: &'static str,
    pub description: &'static str,
    pub points: i32,
}

pub const DAILY_TEMPLATES: [DailyTemplate; 5] = [
    DailyTemplate {
        key: "log_breakfast",
        description: "Registre seu café da manhã",
        points: 10,
    },
    DailyTemplate {
        key: "log_lunch",
        description: "Registre seu almoço",
        points: 10,
    },
    DailyTemplate {
        key: "log_dinner",
        description: "Registre seu jantar",
        points: 10,
    },
    DailyTemplate {
        key: "drink_water",
        description: "Beba 8 copos de água",
        points: 15,
    },
    DailyTemplate {
        key: "try_new_recipe",
        description: "Experimente uma receita nova",
        points: 20,
    },
];

/// The weekly challenges every user starts with.
pub fn default_challenges(user_id: Uuid) -> Vec<Challenge> {
    vec![
        Challenge::new(
            user_id,
            "Complete seu primeiro cardápio",
            "Gere seu primeiro cardápio semanal usando nossa IA",
            100,
            ChallengeType::Weekly,
        ),
        Challenge::new(
            user_id,
            "Use a lista de compras",
            "Faça suas compras usando nossa lista inteligente",
            50,
            ChallengeType::Weekly,
        ),
        Challenge::new(
            user_id,
            "Mantenha a sequência",
            "Use o WeekFit por 7 dias consecutivos",
            200,
            ChallengeType::Weekly,
        ),
    ]
}

/// Three distinct templates picked at random for `date`.
pub fn pick_daily_challenges<R: Rng + ?Sized>(
    rng: &mut R,
    user_id: Uuid,
    date: NaiveDate,
) -> Vec<DailyChallenge> {
    let now = Utc::now();

    DAILY_TEMPLATES
        .choose_multiple(rng, DAILY_PICKS)
        .map(|template| DailyChallenge {
            id: generate_uuid_v7(),
            user_id,
            challenge_date: date,
            challenge_type: template.key.to_string(),
            description: template.description.to_string(),
            points: template.points,
            completed: false,
            completed_at: None,
            created_at: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_three_distinct_daily_challenges() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picks = pick_daily_challenges(&mut rng, Uuid::new_v4(), date);

            assert_eq!(picks.len(), DAILY_PICKS);
            let keys: HashSet<&str> = picks.iter().map(|c| c.challenge_type.as_str()).collect();
            assert_eq!(keys.len(), DAILY_PICKS);
            for pick in &picks {
                let template = DAILY_TEMPLATES.iter().find(|t| t.key == pick.challenge_type).unwrap();
                assert_eq!(pick.points, template.points);
                assert_eq!(pick.challenge_date, date);
                assert!(!pick.completed);
            }
        }
    }

    #[test]
    fn test_default_challenges() {
        let user = Uuid::new_v4();
        let challenges = default_challenges(user);
        let rewards: Vec<i32> = challenges.iter().map(|c| c.points_reward).collect();
        assert_eq!(rewards, vec![100, 50, 200]);
        assert!(challenges.iter().all(|c| c.user_id == user && !c.completed));
        assert!(challenges.iter().all(|c| c.challenge_type == ChallengeType::Weekly));
    }
}
