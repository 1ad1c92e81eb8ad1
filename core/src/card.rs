use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub image: Option<String>,
    pub major: String,
    pub company: String,
    pub bio: String,
    pub location: String,
    pub interests: Vec<String>,
    pub age: u32,
    pub experience: String,
    pub email: Option<String>,
    pub linkedin: Option<String>,
}

impl Card {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ProfileCatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub rarity: Rarity,
    pub image: Option<&'static str>,
    pub major: &'static str,
    pub company: &'static str,
    pub bio: &'static str,
    pub location: &'static str,
    pub interests: &'static [&'static str],
    pub age: u32,
    pub experience: &'static str,
    pub email: Option<&'static str>,
    pub linkedin: Option<&'static str>,
}

impl ProfileCatalogEntry {
    pub fn to_card(&self) -> Card {
        Card {
            id: self.id.to_string(),
            name: self.name.to_string(),
            rarity: self.rarity,
            image: self.image.map(str::to_string),
            major: self.major.to_string(),
            company: self.company.to_string(),
            bio: self.bio.to_string(),
            location: self.location.to_string(),
            interests: self.interests.iter().map(|s| s.to_string()).collect(),
            age: self.age,
            experience: self.experience.to_string(),
            email: self.email.map(str::to_string),
            linkedin: self.linkedin.map(str::to_string),
        }
    }
}

pub const PROFILE_CATALOG: &[ProfileCatalogEntry] = &[
    ProfileCatalogEntry {
        id: "george-liu",
        name: "George Liu",
        rarity: Rarity::Rare,
        image: Some("profiles/georgeliu.jpeg"),
        major: "CS @uwaterloo",
        company: "SWE @Tesla",
        bio: "Passionate about autonomous vehicles and AI. Love hiking and coffee.",
        location: "San Francisco, CA",
        interests: &["Tech", "Hiking", "Coffee", "AI/ML"],
        age: 24,
        experience: "3 years",
        email: Some("george.liu@tesla.com"),
        linkedin: Some("https://linkedin.com/in/george-liu"),
    },
    ProfileCatalogEntry {
        id: "sarah-chen",
        name: "Sarah Chen",
        rarity: Rarity::Common,
        image: None,
        major: "Engineering @MIT",
        company: "Product Manager @Google",
        bio: "Building products that matter. Avid reader and yoga enthusiast.",
        location: "Mountain View, CA",
        interests: &["Product Design", "Reading", "Yoga", "Travel"],
        age: 26,
        experience: "4 years",
        email: Some("sarah.chen@google.com"),
        linkedin: Some("https://linkedin.com/in/sarah-chen"),
    },
    ProfileCatalogEntry {
        id: "alex-rodriguez",
        name: "Alex Rodriguez",
        rarity: Rarity::Common,
        image: None,
        major: "Business @Stanford",
        company: "Founder @TechStartup",
        bio: "Serial entrepreneur. Love building things from scratch.",
        location: "Palo Alto, CA",
        interests: &["Entrepreneurship", "Startups", "Basketball", "Networking"],
        age: 28,
        experience: "6 years",
        email: Some("alex.rodriguez@techstartup.com"),
        linkedin: Some("https://linkedin.com/in/alex-rodriguez"),
    },
    ProfileCatalogEntry {
        id: "emma-wilson",
        name: "Emma Wilson",
        rarity: Rarity::Rare,
        image: None,
        major: "Design @RISD",
        company: "UX Designer @Apple",
        bio: "Designing beautiful experiences. Art lover and foodie.",
        location: "Cupertino, CA",
        interests: &["Design", "Art", "Food", "Photography"],
        age: 25,
        experience: "3 years",
        email: Some("emma.wilson@apple.com"),
        linkedin: Some("https://linkedin.com/in/emma-wilson"),
    },
    ProfileCatalogEntry {
        id: "michael-park",
        name: "Michael Park",
        rarity: Rarity::Legendary,
        image: None,
        major: "Data Science @CMU",
        company: "ML Engineer @OpenAI",
        bio: "Pushing the boundaries of AI. Chess player and music producer.",
        location: "San Francisco, CA",
        interests: &["AI/ML", "Chess", "Music", "Research"],
        age: 27,
        experience: "5 years",
        email: Some("michael.park@openai.com"),
        linkedin: Some("https://linkedin.com/in/michael-park"),
    },
    ProfileCatalogEntry {
        id: "jessica-brown",
        name: "Jessica Brown",
        rarity: Rarity::Common,
        image: None,
        major: "Finance @Wharton",
        company: "Investment Banker @Goldman Sachs",
        bio: "Finance professional by day, fitness enthusiast by night.",
        location: "New York, NY",
        interests: &["Finance", "Fitness", "Cooking", "Wine"],
        age: 29,
        experience: "7 years",
        email: Some("jessica.brown@gs.com"),
        linkedin: Some("https://linkedin.com/in/jessica-brown"),
    },
    ProfileCatalogEntry {
        id: "david-kim",
        name: "David Kim",
        rarity: Rarity::Rare,
        image: None,
        major: "CS @Berkeley",
        company: "Software Engineer @Meta",
        bio: "Full-stack developer. Love open source and gaming.",
        location: "Menlo Park, CA",
        interests: &["Coding", "Gaming", "Open Source", "Biking"],
        age: 24,
        experience: "2 years",
        email: Some("david.kim@meta.com"),
        linkedin: Some("https://linkedin.com/in/david-kim"),
    },
    ProfileCatalogEntry {
        id: "olivia-martinez",
        name: "Olivia Martinez",
        rarity: Rarity::Common,
        image: None,
        major: "Marketing @NYU",
        company: "Brand Manager @Nike",
        bio: "Building brands that inspire. Runner and adventure seeker.",
        location: "Portland, OR",
        interests: &["Marketing", "Running", "Travel", "Fashion"],
        age: 26,
        experience: "4 years",
        email: Some("olivia.martinez@nike.com"),
        linkedin: Some("https://linkedin.com/in/olivia-martinez"),
    },
    ProfileCatalogEntry {
        id: "james-taylor",
        name: "James Taylor",
        rarity: Rarity::Epic,
        image: None,
        major: "Physics @Caltech",
        company: "Research Scientist @NASA",
        bio: "Exploring the cosmos. Amateur astronomer and sci-fi fan.",
        location: "Pasadena, CA",
        interests: &["Space", "Physics", "Astronomy", "Sci-Fi"],
        age: 30,
        experience: "8 years",
        email: Some("james.taylor@nasa.gov"),
        linkedin: Some("https://linkedin.com/in/james-taylor"),
    },
    ProfileCatalogEntry {
        id: "taylor-swift",
        name: "Taylor Swift",
        rarity: Rarity::Uncommon,
        image: None,
        major: "Music @NYU",
        company: "Singer @Republic Records",
        bio: "Songwriter and performer. Love cats and baking.",
        location: "Nashville, TN",
        interests: &["Music", "Cats", "Baking", "Fashion"],
        age: 34,
        experience: "15 years",
        email: Some("taylor.swift@republic.com"),
        linkedin: Some("https://linkedin.com/in/taylor-swift"),
    },
    ProfileCatalogEntry {
        id: "priya-singh",
        name: "Priya Singh",
        rarity: Rarity::Epic,
        image: None,
        major: "Medicine @Johns Hopkins",
        company: "Surgeon @Johns Hopkins Hospital",
        bio: "Dedicated surgeon saving lives. Love reading and classical music.",
        location: "Baltimore, MD",
        interests: &["Medicine", "Surgery", "Reading", "Classical Music"],
        age: 33,
        experience: "11 years",
        email: Some("priya.singh@jhmi.edu"),
        linkedin: Some("https://linkedin.com/in/priya-singh"),
    },
    ProfileCatalogEntry {
        id: "chris-johnson",
        name: "Chris Johnson",
        rarity: Rarity::Legendary,
        image: None,
        major: "Engineering @UT Austin",
        company: "Robotics Engineer @Boston Dynamics",
        bio: "Building the future of robotics. Passionate about AI and automation.",
        location: "Boston, MA",
        interests: &["Robotics", "AI", "3D Printing", "Cycling"],
        age: 26,
        experience: "4 years",
        email: Some("chris.johnson@bostondynamics.com"),
        linkedin: Some("https://linkedin.com/in/chris-johnson"),
    },
    ProfileCatalogEntry {
        id: "amanda-foster",
        name: "Amanda Foster",
        rarity: Rarity::Uncommon,
        image: None,
        major: "Business @Wharton",
        company: "VP @JP Morgan",
        bio: "Finance executive. Love traveling and wine tasting.",
        location: "New York, NY",
        interests: &["Finance", "Travel", "Wine", "Reading"],
        age: 33,
        experience: "11 years",
        email: Some("amanda.foster@jpmorgan.com"),
        linkedin: Some("https://linkedin.com/in/amanda-foster"),
    },
    ProfileCatalogEntry {
        id: "marcus-williams",
        name: "Marcus Williams",
        rarity: Rarity::Epic,
        image: None,
        major: "Engineering @MIT",
        company: "Lead Engineer @SpaceX",
        bio: "Building rockets to Mars. Space enthusiast and science fiction fan.",
        location: "Hawthorne, CA",
        interests: &["Space", "Engineering", "Sci-Fi", "Rock Climbing"],
        age: 29,
        experience: "7 years",
        email: Some("marcus.williams@spacex.com"),
        linkedin: Some("https://linkedin.com/in/marcus-williams"),
    },
    ProfileCatalogEntry {
        id: "emily-chen",
        name: "Emily Chen",
        rarity: Rarity::Rare,
        image: None,
        major: "Data Science @Berkeley",
        company: "Data Scientist @Netflix",
        bio: "Analyzing data to improve user experience. Movie buff and foodie.",
        location: "Los Gatos, CA",
        interests: &["Data Science", "Movies", "Food", "Yoga"],
        age: 26,
        experience: "4 years",
        email: Some("emily.chen@netflix.com"),
        linkedin: Some("https://linkedin.com/in/emily-chen"),
    },
];

// Used to pad short pools up to a full pack; ids are re-namespaced at draw
// time so a pool that already contains one of these never collides.
pub const FALLBACK_PROFILES: &[ProfileCatalogEntry] = &[
    ProfileCatalogEntry {
        id: "nathan-brown",
        name: "Nathan Brown",
        rarity: Rarity::Common,
        image: None,
        major: "Business @Kellogg",
        company: "Product Manager @Microsoft",
        bio: "Building products that empower people. Love reading and podcasts.",
        location: "Redmond, WA",
        interests: &["Product Management", "Reading", "Podcasts", "Running"],
        age: 27,
        experience: "5 years",
        email: Some("nathan.brown@microsoft.com"),
        linkedin: Some("https://linkedin.com/in/nathan-brown"),
    },
    ProfileCatalogEntry {
        id: "isabella-rodriguez",
        name: "Isabella Rodriguez",
        rarity: Rarity::Rare,
        image: None,
        major: "Design @Parsons",
        company: "UX Designer @Figma",
        bio: "Designing tools for designers. Art lover and coffee enthusiast.",
        location: "San Francisco, CA",
        interests: &["Design", "Art", "Coffee", "Photography"],
        age: 25,
        experience: "3 years",
        email: Some("isabella.rodriguez@figma.com"),
        linkedin: Some("https://linkedin.com/in/isabella-rodriguez"),
    },
    ProfileCatalogEntry {
        id: "ian-thompson",
        name: "Ian Thompson",
        rarity: Rarity::Uncommon,
        image: None,
        major: "CS @MIT",
        company: "Engineer @Amazon",
        bio: "Cloud engineer. Love building scalable systems and gaming.",
        location: "Seattle, WA",
        interests: &["Cloud", "Systems", "Gaming", "Hiking"],
        age: 28,
        experience: "6 years",
        email: Some("ian.thompson@amazon.com"),
        linkedin: Some("https://linkedin.com/in/ian-thompson"),
    },
    ProfileCatalogEntry {
        id: "lauren-brown",
        name: "Lauren Brown",
        rarity: Rarity::Uncommon,
        image: None,
        major: "Finance @Wharton",
        company: "Analyst @Goldman Sachs",
        bio: "Financial analyst. Love cooking and wine.",
        location: "New York, NY",
        interests: &["Finance", "Cooking", "Wine", "Travel"],
        age: 25,
        experience: "3 years",
        email: Some("lauren.brown@gs.com"),
        linkedin: Some("https://linkedin.com/in/lauren-brown"),
    },
    ProfileCatalogEntry {
        id: "samantha-taylor",
        name: "Samantha Taylor",
        rarity: Rarity::Common,
        image: None,
        major: "Law @Yale",
        company: "Attorney @Law Firm",
        bio: "Fighting for justice. Love reading legal cases and traveling.",
        location: "New York, NY",
        interests: &["Law", "Justice", "Reading", "Travel"],
        age: 31,
        experience: "9 years",
        email: Some("samantha.taylor@lawfirm.com"),
        linkedin: Some("https://linkedin.com/in/samantha-taylor"),
    },
];

pub fn catalog_pool() -> Vec<Card> {
    PROFILE_CATALOG.iter().map(|entry| entry.to_card()).collect()
}

pub fn profile_by_id(id: &str) -> Option<&'static ProfileCatalogEntry> {
    let trimmed = id.trim();
    PROFILE_CATALOG
        .iter()
        .find(|entry| entry.id.eq_ignore_ascii_case(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_order_is_total() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Uncommon < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
    }

    #[test]
    fn initials_from_name() {
        let card = profile_by_id("george-liu").unwrap().to_card();
        assert_eq!(card.initials(), "GL");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let pool = catalog_pool();
        for (index, card) in pool.iter().enumerate() {
            assert!(
                pool[index + 1..].iter().all(|other| other.id != card.id),
                "duplicate catalog id {}",
                card.id
            );
        }
    }
}
