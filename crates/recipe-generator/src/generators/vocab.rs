//! Word pools used by the field generators.

pub const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Abel", "Ada", "Adrian", "Aiden", "Alejandra", "Alice", "Amara", "Amelia", "Anders",
    "Andre", "Anika", "Arthur", "Aurora", "Beatrice", "Benjamin", "Bianca", "Caleb", "Camila",
    "Carlos", "Chloe", "Clara", "Connor", "Dalia", "Daniel", "Delphine", "Diego", "Eleanor",
    "Elena", "Eli", "Emeka", "Emma", "Ethan", "Fatima", "Felix", "Finn", "Freya", "Gabriel",
    "Grace", "Hana", "Harper", "Henry", "Hugo", "Ibrahim", "Imani", "Ingrid", "Isaac", "Isla",
    "Jack", "Jasmine", "Javier", "Jonah", "Julia", "Kai", "Kenji", "Lars", "Layla", "Leo", "Lucia",
    "Luka", "Maya", "Mateo", "Mila", "Nadia", "Nathan", "Noah", "Nora", "Olivia", "Omar", "Oscar",
    "Priya", "Quinn", "Rafael", "Rosa", "Ruby", "Samir", "Sofia", "Stella", "Theo", "Valentina",
    "Wei", "Yara", "Yusuf", "Zoe",
];

pub const LAST_NAMES: &[&str] = &[
    "Abbott", "Adeyemi", "Alvarez", "Anderson", "Bakker", "Bauer", "Bennett", "Brooks", "Castillo",
    "Chen", "Costa", "Dubois", "Eriksson", "Fernandez", "Fischer", "Flores", "Garcia", "Gomez",
    "Greene", "Gupta", "Hansen", "Harris", "Hernandez", "Ito", "Jackson", "Jensen", "Johnson",
    "Kaur", "Kim", "Kowalski", "Larsen", "Lee", "Lopez", "Martin", "Meyer", "Moreau", "Murphy",
    "Nakamura", "Nguyen", "Novak", "O'Brien", "O'Connell", "Okafor", "Olsen", "Patel", "Perez",
    "Petrov", "Quinn", "Ramirez", "Rossi", "Russo", "Sato", "Schmidt", "Silva", "Singh", "Smith",
    "Sullivan", "Tanaka", "Taylor", "Torres", "Van der Berg", "Walker", "Wang", "Weber", "Williams",
    "Wright", "Yamamoto", "Young", "Zhang",
];

pub const DISHES: &[&str] = &[
    "Bibimbap",
    "Butter Chicken",
    "Caesar Salad",
    "Chicken Fajitas",
    "Chili Con Carne",
    "Clam Chowder",
    "Eggs Benedict",
    "Fish and Chips",
    "French Onion Soup",
    "Green Curry",
    "Lasagne",
    "Massaman Curry",
    "Moussaka",
    "Mushroom Risotto",
    "Pad Thai",
    "Paella",
    "Pasta Carbonara",
    "Peking Duck",
    "Pho",
    "Pierogi",
    "Ramen",
    "Ratatouille",
    "Shakshuka",
    "Shepherd's Pie",
    "Souvlaki",
    "Spaghetti Bolognese",
    "Sushi",
    "Tacos al Pastor",
    "Tikka Masala",
    "Tom Yum Soup",
    "Vegetable Lasagne",
    "Wiener Schnitzel",
];

pub const ADJECTIVES: &[&str] = &[
    "bitter", "creamy", "crispy", "crunchy", "delicious", "fluffy", "fresh", "golden", "hearty",
    "juicy", "mild", "rich", "salty", "savory", "smoky", "sour", "spicy", "sweet", "tangy",
    "tender", "zesty",
];

pub const ETHNIC_CATEGORIES: &[&str] = &[
    "Brazilian",
    "Caribbean",
    "Chinese",
    "Ethiopian",
    "French",
    "Greek",
    "Indian",
    "Indonesian",
    "Italian",
    "Japanese",
    "Korean",
    "Lebanese",
    "Mexican",
    "Moroccan",
    "Peruvian",
    "Spanish",
    "Thai",
    "Turkish",
    "Vietnamese",
];

pub const INGREDIENTS: &[&str] = &[
    "anchovies",
    "arborio rice",
    "avocado",
    "basil",
    "bay leaves",
    "black pepper",
    "butter",
    "cabbage",
    "cardamom",
    "carrots",
    "celery",
    "cheddar cheese",
    "chicken thighs",
    "chickpeas",
    "chili flakes",
    "cilantro",
    "coconut milk",
    "cumin",
    "eggs",
    "fish sauce",
    "garlic",
    "ginger",
    "ground beef",
    "heavy cream",
    "honey",
    "lemon juice",
    "lime",
    "mushrooms",
    "olive oil",
    "onion",
    "oregano",
    "paprika",
    "parmesan",
    "potatoes",
    "rice noodles",
    "rosemary",
    "salmon",
    "sea salt",
    "shrimp",
    "soy sauce",
    "spinach",
    "thyme",
    "tofu",
    "tomatoes",
    "turmeric",
    "vegetable stock",
    "white wine",
    "yogurt",
    "zucchini",
];

pub const COOKING_METHODS: &[&str] = &[
    "baked",
    "braised",
    "grilled",
    "pan-fried",
    "poached",
    "roasted",
    "slow-cooked",
    "steamed",
    "stir-fried",
];

/// Description templates; placeholders are filled by `text::fill_template`.
pub const DESCRIPTION_TEMPLATES: &[&str] = &[
    "A classic {dish} made with {ingredient}, {ingredient} and a touch of {ingredient}.",
    "{cooking} {ingredient} served with {adjective} {ingredient} and fresh {ingredient}.",
    "Our {adjective} take on {dish}, finished with {ingredient}.",
    "A {adjective} family favourite: {cooking} {ingredient} over {ingredient}.",
    "Simple, {adjective} {dish} with {ingredient} and {ingredient}, ready in under an hour.",
    "Three-layer {dish} topped with {adjective} {ingredient}.",
];

pub const EMAIL_PROVIDERS: &[&str] = &["gmail.com", "hotmail.com", "yahoo.com"];

pub const LOREM_WORDS: &[&str] = &[
    "a", "ab", "accusamus", "ad", "adipisci", "alias", "aliquam", "amet", "animi", "aperiam",
    "architecto", "asperiores", "aut", "autem", "beatae", "blanditiis", "commodi", "consectetur",
    "consequatur", "corporis", "corrupti", "culpa", "cum", "cumque", "cupiditate", "debitis",
    "delectus", "deleniti", "deserunt", "dicta", "dignissimos", "distinctio", "dolor", "dolore",
    "dolorem", "dolores", "doloribus", "ducimus", "ea", "earum", "eius", "eligendi", "enim", "eos",
    "error", "esse", "est", "et", "eum", "eveniet", "ex", "excepturi", "exercitationem",
    "explicabo", "facere", "facilis", "fuga", "fugiat", "harum", "hic", "id", "illo", "impedit",
    "in", "incidunt", "ipsa", "ipsam", "ipsum", "iste", "itaque", "iure", "labore", "laborum",
    "laudantium", "libero", "magnam", "magni", "maiores", "maxime", "minima", "minus",
    "molestiae", "mollitia", "nam", "natus", "necessitatibus", "nemo", "neque", "nesciunt",
    "nihil", "nisi", "nobis", "non", "nostrum", "nulla", "numquam", "obcaecati", "odio", "odit",
    "officia", "omnis", "optio", "perferendis", "perspiciatis", "placeat", "porro", "possimus",
    "praesentium", "provident", "quae", "quam", "quas", "quia", "quibusdam", "quidem", "quis",
    "quisquam", "quo", "quod", "quos", "ratione", "recusandae", "reiciendis", "rem", "repellat",
    "repellendus", "reprehenderit", "rerum", "saepe", "sapiente", "sed", "sequi", "similique",
    "sint", "sit", "soluta", "sunt", "suscipit", "tempora", "tempore", "temporibus", "tenetur",
    "totam", "ullam", "unde", "ut", "vel", "velit", "veniam", "veritatis", "vero", "vitae",
    "voluptas", "voluptate", "voluptatem", "voluptates", "voluptatibus", "voluptatum",
];
