// (name, meaning, cultural_notes)

pub const MALE: &[(&str, &str, &str)] = &[
    (
        "William",
        "Resolute protector",
        "A royal name carried by four English kings; easy to pronounce for Mandarin speakers and shortens to Will or Bill.",
    ),
    (
        "James",
        "Supplanter",
        "One of the most common English names for centuries, associated with the King James Bible and seen as steady and dependable.",
    ),
    (
        "Alexander",
        "Defender of the people",
        "Recalls Alexander the Great; popular in both Europe and Asia and pairs well with a short family name like Wang or Li.",
    ),
    (
        "Benjamin",
        "Son of the right hand",
        "A biblical name associated with Benjamin Franklin; the nickname Ben is friendly and easy in international settings.",
    ),
    (
        "Henry",
        "Ruler of the home",
        "A classic English royal name that has become fashionable again; short, warm and clear in pronunciation.",
    ),
    (
        "Daniel",
        "God is my judge",
        "Widely used across English-speaking countries and familiar in many cultures, which makes it a safe global choice.",
    ),
    (
        "Ethan",
        "Strong and firm",
        "A modern favourite in the US; its meaning echoes the Chinese value of 坚定 (steadfastness).",
    ),
    (
        "Leo",
        "Lion",
        "Short and bold, linked to the zodiac sign and to strength; works well alongside a two-syllable family name.",
    ),
];

pub const FEMALE: &[(&str, &str, &str)] = &[
    (
        "Grace",
        "Elegance and goodwill",
        "A virtue name expressing kindness and poise, close in spirit to the Chinese 雅 (refined).",
    ),
    (
        "Sophia",
        "Wisdom",
        "From Greek; consistently among the most popular girls' names worldwide and reflects the value placed on learning.",
    ),
    (
        "Emily",
        "Industrious",
        "Associated with the writer Emily Brontë; gentle in sound and easy for Mandarin speakers to pronounce.",
    ),
    (
        "Olivia",
        "Olive tree",
        "The olive branch symbolises peace; popularised by Shakespeare's Twelfth Night and a top choice today.",
    ),
    (
        "Charlotte",
        "Free woman",
        "A royal name with French roots, elegant in full and friendly as Lottie or Charlie.",
    ),
    (
        "Lily",
        "Lily flower",
        "Flower names are loved in Chinese naming as well; the lily stands for purity and 百年好合 (harmony).",
    ),
    (
        "Amelia",
        "Work",
        "Linked to aviator Amelia Earhart; suggests courage and independence.",
    ),
    (
        "Chloe",
        "Blooming",
        "A Greek name associated with spring growth; short and lively, with a sound similar to 可 (kě).",
    ),
];
