//! Prompt sent to the text generator for a recipe suggestion

/// Build the chef prompt for a category, a list of ingredients and a cuisine
pub fn build_prompt(food_type: &str, ingredients: &[String], cuisine: &str) -> String {
    format!(
        "As a professional chef give me the best recipe within the category of {food_type} food, \
         the type of cooking is {cuisine}, with the following ingredients: {ingredients}. \
         give me tips and tricks to get the best result, \
         give me the recipe with the least amount of words possible.",
        food_type = food_type,
        cuisine = cuisine,
        ingredients = ingredients.join(", "),
    )
}
