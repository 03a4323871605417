//! Fixed content pools for the seed generator.

/// The full quote catalog, inserted once when no seeded quote exists.
pub const QUOTES: &[(&str, &str)] = &[
    ("If you tell the truth, you don't have to remember anything.", "Mark Twain"),
    ("Be yourself; everyone else is already taken.", "Oscar Wilde"),
    ("So many books, so little time.", "Frank Zappa"),
    ("A room without books is like a body without a soul.", "Marcus Tullius Cicero"),
    ("You only live once, but if you do it right, once is enough.", "Mae West"),
    ("Be the change that you wish to see in the world.", "Mahatma Gandhi"),
    ("In three words I can sum up everything I've learned about life: it goes on.", "Robert Frost"),
    ("Without music, life would be a mistake.", "Friedrich Nietzsche"),
    ("We accept the love we think we deserve.", "Stephen Chbosky"),
    ("Imperfection is beauty, madness is genius.", "Marilyn Monroe"),
    ("To live is the rarest thing in the world. Most people exist, that is all.", "Oscar Wilde"),
    ("Always forgive your enemies; nothing annoys them so much.", "Oscar Wilde"),
    ("Live as if you were to die tomorrow. Learn as if you were to live forever.", "Mahatma Gandhi"),
    ("Darkness cannot drive out darkness: only light can do that.", "Martin Luther King Jr."),
    ("Without deviation from the norm, progress is not possible.", "Frank Zappa"),
    ("Never let the fear of striking out keep you from playing the game.", "Babe Ruth"),
    ("There is no greater agony than bearing an untold story inside you.", "Maya Angelou"),
    ("It is better to be hated for what you are than to be loved for what you are not.", "Andre Gide"),
    ("Everything you can imagine is real.", "Pablo Picasso"),
    ("Do what you can, with what you have, where you are.", "Theodore Roosevelt"),
    ("The only way out of the labyrinth of suffering is to forgive.", "John Green"),
    ("It does not do to dwell on dreams and forget to live.", "J.K. Rowling"),
    ("Life is what happens to us while we are making other plans.", "Allen Saunders"),
    ("The fool doth think he is wise, but the wise man knows himself to be a fool.", "William Shakespeare"),
    ("Whenever you find yourself on the side of the majority, it is time to pause and reflect.", "Mark Twain"),
    ("It is never too late to be what you might have been.", "George Eliot"),
    ("Everything that irritates us about others can lead us to an understanding of ourselves.", "Carl Gustav Jung"),
    ("I have not failed. I've just found 10,000 ways that won't work.", "Thomas A. Edison"),
    ("The man who does not read has no advantage over the man who cannot read.", "Mark Twain"),
    ("A friend is someone who knows all about you and still loves you.", "Elbert Hubbard"),
];

/// Pet names drawn uniformly by the generator.
pub const PET_NAMES: &[&str] = &[
    "Buddy", "Molly", "Charlie", "Bella", "Max", "Luna", "Rocky", "Daisy", "Oscar", "Ruby",
    "Simba", "Nala", "Coco", "Teddy", "Pepper", "Smokey", "Felix", "Misty", "Rex", "Tilda",
];

/// Countries used for generated addresses.
pub const COUNTRIES: &[&str] = &["Sweden", "Norway", "Denmark", "Finland"];
