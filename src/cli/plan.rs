use clap::Args;
use mealslot::PlanSession;
use mealslot_gateway::RecipeQuery;
use mealslot_mealplan::{AutoFillReport, daily_menu};
use mealslot_shared::mealplan::{DayIndex, MealType, SlotKey};
use mealslot_shared::recipe::{CuisineType, Diet};
use mealslot_shared::{Horizon, Period, today};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::VariantArray;
use time::Date;

#[derive(Args)]
pub struct HorizonArgs {
    /// weekly or monthly
    #[arg(long, default_value_t = Period::Weekly)]
    period: Period,

    /// Number of days of a monthly plan (1 to 30)
    #[arg(long)]
    days: Option<u16>,

    /// First day, YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = super::parse_date)]
    start: Option<Date>,

    /// Seed for reproducible suggestions
    #[arg(long)]
    seed: Option<u64>,
}

impl HorizonArgs {
    fn horizon(&self) -> mealslot_shared::Result<Horizon> {
        Horizon::for_period(self.period, self.start.unwrap_or_else(today), self.days)
    }
}

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    horizon: HorizonArgs,

    #[arg(long, default_value_t = CuisineType::Random)]
    cuisine: CuisineType,

    /// Diet filter, repeatable
    #[arg(long = "diet")]
    diets: Vec<Diet>,

    /// Fill from recipe searches instead of the built-in catalog
    #[arg(long)]
    remote: bool,

    /// Skip the extra fruit suggestion per slot
    #[arg(long)]
    no_bonus: bool,

    /// Cups of water logged for a day, DAY=CUPS with days from 1, repeatable
    #[arg(long, value_parser = super::parse_water)]
    water: Vec<(u16, u8)>,

    /// Save every filled slot
    #[arg(long)]
    save: bool,
}

#[tracing::instrument(skip_all)]
pub async fn plan(config: mealslot::Config, args: PlanArgs) -> anyhow::Result<()> {
    let horizon = args.horizon.horizon()?;
    let goals = super::goals(&config)?;
    let mut session = match args.horizon.seed {
        Some(seed) => PlanSession::with_seed(horizon, goals, seed),
        None => PlanSession::new(horizon, goals),
    };

    for (day, cups) in &args.water {
        session.set_water(DayIndex(day - 1), *cups)?;
    }

    let fruit_bonus = config.planner.fruit_bonus && !args.no_bonus;

    let report = if args.remote {
        let gateway = super::gateway(&config)?;
        let filters = RecipeQuery::new("")
            .cuisine(args.cuisine)
            .diets(args.diets)
            .number(config.gateway.page_size);

        session
            .auto_fill_remote(&gateway, &filters, fruit_bonus)
            .await?
    } else {
        session.auto_fill_local(fruit_bonus)?
    };

    print_plan(&session, report);

    if args.save {
        let pool = mealslot::open_database(&config.database.url).await?;
        let ids = session.save_all(&pool).await?;
        println!("Saved {} slots", ids.len());
    }

    Ok(())
}

fn print_plan(session: &PlanSession, report: AutoFillReport) {
    let store = session.store();
    let goals = session.goals();
    let totals = store.weekly_totals();

    for (day, total) in session.horizon().days().iter().zip(&totals.days) {
        println!("{} ({})", day.label, day.date);

        for meal_type in MealType::VARIANTS {
            let key = SlotKey {
                day: day.index,
                meal_type: *meal_type,
            };

            for entry in store.entries(key) {
                println!(
                    "  {meal_type:<9} {} | {:.0} kcal | P {:.1}g C {:.1}g F {:.1}g",
                    entry.title, entry.calories, entry.protein, entry.carbs, entry.fat
                );
            }
        }

        println!(
            "  Total {:.0} / {} kcal, water {} / {} cups",
            total.calories,
            goals.calories,
            session.water().cups(day.index),
            goals.water_cups
        );
    }

    println!(
        "{} meals, {:.0} kcal over {} days ({} added, {} dropped on full slots, {} without candidates)",
        totals.entries,
        totals.calories,
        totals.days.len(),
        report.inserted,
        report.slot_full,
        report.empty_pool
    );
}

#[derive(Args)]
pub struct MenuArgs {
    #[command(flatten)]
    horizon: HorizonArgs,

    #[arg(long, default_value_t = CuisineType::Random)]
    cuisine: CuisineType,
}

pub fn menu(args: MenuArgs) -> anyhow::Result<()> {
    let horizon = args.horizon.horizon()?;
    let mut rng = match args.horizon.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for (day, dish) in daily_menu(horizon.days(), args.cuisine, &mut rng) {
        println!("{:<10} {dish}", day.label);
    }

    Ok(())
}
