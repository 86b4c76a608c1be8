use serde::Serialize;

use super::{has_factor, AgeBand};
use crate::assessment::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub duration: &'static str,
    pub intensity: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseRoutine {
    pub name: &'static str,
    pub description: &'static str,
    pub frequency: &'static str,
    pub exercises: &'static [Exercise],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseRecommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub routines: Vec<ExerciseRoutine>,
    pub tips: Vec<&'static str>,
}

struct FactorAddition {
    factor: &'static str,
    routine: ExerciseRoutine,
    tips: &'static [&'static str],
}

const BASELINE_TITLE: &str = "PCOS Exercise Foundations";
const BASELINE_DESCRIPTION: &str = "A balanced weekly mix of cardio, strength, and recovery to support insulin sensitivity and energy.";

const COMPREHENSIVE_TITLE: &str = "Comprehensive PCOS Exercise Program";
const COMPREHENSIVE_DESCRIPTION: &str = "A progressive program combining resistance training and conditioning to improve insulin sensitivity and hormonal balance.";

const TARGETED_TITLE: &str = "Targeted PCOS Fitness Plan";
const TARGETED_DESCRIPTION: &str = "A focused routine built around the symptoms you reported, with room to progress at your own pace.";

const BASELINE_ROUTINES: [ExerciseRoutine; 3] = [
    ExerciseRoutine {
        name: "Cardiovascular Training",
        description: "Steady movement that improves heart health and insulin response.",
        frequency: "3-4 times per week",
        exercises: &[
            Exercise {
                name: "Brisk walking",
                duration: "30 minutes",
                intensity: "Moderate",
            },
            Exercise {
                name: "Cycling",
                duration: "20-30 minutes",
                intensity: "Moderate",
            },
            Exercise {
                name: "Swimming",
                duration: "20-30 minutes",
                intensity: "Moderate",
            },
        ],
    },
    ExerciseRoutine {
        name: "Strength Training",
        description: "Building muscle increases glucose uptake and resting metabolism.",
        frequency: "2-3 times per week",
        exercises: &[
            Exercise {
                name: "Bodyweight squats",
                duration: "3 sets of 12",
                intensity: "Moderate",
            },
            Exercise {
                name: "Push-ups (modified as needed)",
                duration: "3 sets of 10",
                intensity: "Moderate",
            },
            Exercise {
                name: "Glute bridges",
                duration: "3 sets of 15",
                intensity: "Low",
            },
        ],
    },
    ExerciseRoutine {
        name: "Flexibility & Recovery",
        description: "Stretching and mobility work that reduces stress and aids recovery.",
        frequency: "Daily",
        exercises: &[
            Exercise {
                name: "Full-body stretching",
                duration: "10-15 minutes",
                intensity: "Low",
            },
            Exercise {
                name: "Deep breathing",
                duration: "5 minutes",
                intensity: "Low",
            },
        ],
    },
];

const BASELINE_TIPS: [&str; 3] = [
    "Start gradually and increase intensity over several weeks.",
    "Aim for at least 150 minutes of moderate activity each week.",
    "Choose activities you enjoy so you can stay consistent.",
];

const HIGH_RISK_TIPS: [&str; 2] = [
    "Check with your healthcare provider before starting a higher-intensity program.",
    "Track your workouts alongside your symptoms to see what helps most.",
];

const FACTOR_ADDITIONS: [FactorAddition; 4] = [
    FactorAddition {
        factor: "weight-gain",
        routine: ExerciseRoutine {
            name: "Metabolic Conditioning",
            description: "Short intervals that raise calorie burn and improve insulin sensitivity.",
            frequency: "2 times per week",
            exercises: &[
                Exercise {
                    name: "Interval walking or jogging",
                    duration: "20 minutes (1 min fast / 2 min easy)",
                    intensity: "High",
                },
                Exercise {
                    name: "Kettlebell swings",
                    duration: "4 sets of 15",
                    intensity: "High",
                },
            ],
        },
        tips: &["Combine strength and interval work for the biggest metabolic benefit."],
    },
    FactorAddition {
        factor: "irregular-periods",
        routine: ExerciseRoutine {
            name: "Hormone-Balancing Movement",
            description: "Gentle, stress-lowering practices that support a regular cycle.",
            frequency: "3 times per week",
            exercises: &[
                Exercise {
                    name: "Yoga flow",
                    duration: "30 minutes",
                    intensity: "Low",
                },
                Exercise {
                    name: "Pilates",
                    duration: "30 minutes",
                    intensity: "Moderate",
                },
            ],
        },
        tips: &["Avoid chronic overtraining, which can further disrupt your cycle."],
    },
    FactorAddition {
        factor: "acne",
        routine: ExerciseRoutine {
            name: "Low-Stress Cardio",
            description: "Moderate cardio that lowers stress hormones without overheating.",
            frequency: "3 times per week",
            exercises: &[
                Exercise {
                    name: "Outdoor walking",
                    duration: "30 minutes",
                    intensity: "Low",
                },
                Exercise {
                    name: "Elliptical trainer",
                    duration: "20 minutes",
                    intensity: "Moderate",
                },
            ],
        },
        tips: &["Shower and cleanse your skin soon after sweating."],
    },
    FactorAddition {
        factor: "mood-changes",
        routine: ExerciseRoutine {
            name: "Mood-Boosting Activities",
            description: "Social and outdoor movement that lifts mood and eases anxiety.",
            frequency: "2-3 times per week",
            exercises: &[
                Exercise {
                    name: "Dance class",
                    duration: "45 minutes",
                    intensity: "Moderate",
                },
                Exercise {
                    name: "Nature walk",
                    duration: "30-45 minutes",
                    intensity: "Low",
                },
            ],
        },
        tips: &[
            "Exercise earlier in the day to support better sleep.",
            "Work out with a friend or group for motivation and social support.",
        ],
    },
];

const YOUTH_TIP: &str = "Try team sports or group classes to build an active routine that lasts.";

const JOINT_AND_BONE_ROUTINE: ExerciseRoutine = ExerciseRoutine {
    name: "Joint & Bone Health",
    description: "Low-impact strength and balance work that protects joints and bone density.",
    frequency: "2-3 times per week",
    exercises: &[
        Exercise {
            name: "Resistance band training",
            duration: "20 minutes",
            intensity: "Moderate",
        },
        Exercise {
            name: "Balance exercises",
            duration: "10 minutes",
            intensity: "Low",
        },
        Exercise {
            name: "Water aerobics",
            duration: "30 minutes",
            intensity: "Low",
        },
    ],
};

const MATURE_TIPS: [&str; 2] = [
    "Favor low-impact options to protect your joints.",
    "Include weight-bearing exercise to maintain bone density.",
];

/// Builds the exercise plan for an assessment. Pure and total.
pub fn exercise_plan<S: AsRef<str>>(
    risk_level: RiskLevel,
    key_factors: &[S],
    age: &str,
) -> ExerciseRecommendation {
    let mut plan = ExerciseRecommendation {
        title: BASELINE_TITLE,
        description: BASELINE_DESCRIPTION,
        routines: BASELINE_ROUTINES.to_vec(),
        tips: BASELINE_TIPS.to_vec(),
    };

    match risk_level {
        RiskLevel::High => {
            plan.title = COMPREHENSIVE_TITLE;
            plan.description = COMPREHENSIVE_DESCRIPTION;
            plan.tips.extend_from_slice(&HIGH_RISK_TIPS);
        }
        RiskLevel::Moderate => {
            plan.title = TARGETED_TITLE;
            plan.description = TARGETED_DESCRIPTION;
        }
        RiskLevel::Low => {}
    }

    for addition in &FACTOR_ADDITIONS {
        if has_factor(key_factors, addition.factor) {
            plan.routines.push(addition.routine);
            plan.tips.extend_from_slice(addition.tips);
        }
    }

    match AgeBand::from_answer(age) {
        AgeBand::Youth => plan.tips.push(YOUTH_TIP),
        AgeBand::Mature => {
            plan.routines.push(JOINT_AND_BONE_ROUTINE);
            plan.tips.extend_from_slice(&MATURE_TIPS);
        }
        AgeBand::Unbanded => {}
    }

    plan
}
