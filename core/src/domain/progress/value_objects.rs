use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct RecordProgressInput {
    pub recorded_date: Option<NaiveDate>,
    pub weight: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub waist_circumference: Option<f64>,
    pub notes: Option<String>,
}
