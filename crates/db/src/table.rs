use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Plans {
    Table,
    Id,
    Date,
    MealType,
    Items,
    Calories,
    Protein,
    Carbs,
    Fat,
}
