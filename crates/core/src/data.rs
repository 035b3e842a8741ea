//! The destination catalog table.
//!
//! Table order is load-bearing: superlative queries and name lookups break
//! ties in favor of the first row, and the empty-query search contract
//! returns rows in this exact order. Append new destinations at the end.

use crate::destination::{Destination, Ratings, Review};
use crate::rank::Rank;

/// Every bookable destination, in table order.
pub static DESTINATIONS: &[Destination] = &[
    Destination {
        id: "mustafar-volcano-spires",
        name: "Mustafar Volcano Spires",
        description: "Lava bath chambers and fortress suites",
        background_lore: "Once the site of Anakin's transformation into Darth Vader, these volcanic spires now house the galaxy's most exclusive dark side retreats. The constant flow of lava provides natural heating and Force amplification.",
        adventure_level: 9,
        danger_level: 8,
        gravity_level: 1.2,
        price: "2,500 Imperial Credits",
        image: "https://images.unsplash.com/photo-1494891848038-7bd202a2afeb?auto=format&fit=crop&w=800&q=80",
        keywords: &["mustafar", "volcano", "lava", "fortress", "fire", "heat"],
        ratings: Ratings { average: 4.8, count: 127 },
        reviews: &[Review {
            id: "1",
            user_name: "Darth Malak",
            user_rank: "Sith Lord",
            rating: 5,
            comment: "The lava chambers exceeded my expectations. Perfect for dark meditation.",
            date: "2024-01-15",
            ai_generated: true,
        }],
        survival_notes: &[
            "Bring heat-resistant gear - temperatures reach 2000\u{b0}C",
            "Lava flows change daily - check with concierge",
            "Force lightning is amplified 300% here",
        ],
        required_rank: Rank::Inquisitor,
    },
    Destination {
        id: "exegol-meditation-crypts",
        name: "Exegol Meditation Crypts",
        description: "Infinite silence and power surges",
        background_lore: "The hidden Sith world where Emperor Palpatine built his Final Order. Ancient Sith temples converted into luxury meditation chambers where the dark side flows strongest.",
        adventure_level: 7,
        danger_level: 6,
        gravity_level: 0.9,
        price: "5,000 Imperial Credits",
        image: "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?auto=format&fit=crop&w=800&q=80",
        keywords: &["exegol", "meditation", "crypts", "silence", "power", "dark"],
        ratings: Ratings { average: 4.9, count: 89 },
        reviews: &[Review {
            id: "2",
            user_name: "Asajj Ventress",
            user_rank: "Dark Assassin",
            rating: 5,
            comment: "The Force whispers secrets here. Unparalleled for dark side training.",
            date: "2024-01-20",
            ai_generated: true,
        }],
        survival_notes: &[
            "Silence is mandatory - speaking disrupts Force flows",
            "Ancient Sith spirits may appear during meditation",
            "Emergency beacons don't work here",
        ],
        required_rank: Rank::Lord,
    },
    Destination {
        id: "korriban-tomb-suites",
        name: "Korriban Tomb Suites",
        description: "Sleep among the ancient Sith Lords",
        background_lore: "The birthplace of the Sith Order, where ancient Dark Lords rest eternal. Luxury suites built within actual Sith tombs, surrounded by millennia of dark side energy.",
        adventure_level: 8,
        danger_level: 7,
        gravity_level: 1.1,
        price: "3,800 Imperial Credits",
        image: "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?auto=format&fit=crop&w=800&q=80",
        keywords: &["korriban", "tomb", "ancient", "sith", "lords", "burial"],
        ratings: Ratings { average: 4.7, count: 156 },
        reviews: &[],
        survival_notes: &[
            "Tomb guardians activate at midnight",
            "Ancient curses may affect weak-minded visitors",
            "Holocrons occasionally manifest",
        ],
        required_rank: Rank::Inquisitor,
    },
    Destination {
        id: "dromund-kaas-sky-sanctums",
        name: "Dromund Kaas Sky Sanctums",
        description: "Luxury in a storm-wracked skyline",
        background_lore: "Capital of the ancient Sith Empire, perpetually shrouded in Force storms. Sky-high sanctums offer panoramic views of endless lightning while providing ultimate luxury.",
        adventure_level: 6,
        danger_level: 4,
        gravity_level: 1.0,
        price: "4,200 Imperial Credits",
        image: "https://images.unsplash.com/photo-1470813740244-df37b8c1edcb?auto=format&fit=crop&w=800&q=80",
        keywords: &["dromund", "kaas", "sky", "storm", "luxury", "skyline"],
        ratings: Ratings { average: 4.6, count: 203 },
        reviews: &[],
        survival_notes: &[
            "Lightning strikes are frequent but harmless to structures",
            "Force storms enhance dark side abilities",
            "Elevator systems may fail during major storms",
        ],
        required_rank: Rank::Acolyte,
    },
    Destination {
        id: "dathomir-nightsister-retreats",
        name: "Dathomir Nightsister Retreats",
        description: "Mystical caves with ancient magic",
        background_lore: "Home to the Nightsisters and their dark magicks. These retreats offer unique experiences in Force witchcraft and ancient Dathomirian rituals.",
        adventure_level: 8,
        danger_level: 6,
        gravity_level: 1.1,
        price: "4,500 Imperial Credits",
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=800&q=80",
        keywords: &["dathomir", "nightsister", "magic", "caves", "mystical", "witches"],
        ratings: Ratings { average: 4.5, count: 98 },
        reviews: &[],
        survival_notes: &[
            "Nightsister magic affects technology unpredictably",
            "Rancor encounters possible in outer caves",
            "Green mist indicates active spell zones",
        ],
        required_rank: Rank::Inquisitor,
    },
    Destination {
        id: "malachor-shadow-temples",
        name: "Malachor Shadow Temples",
        description: "Where the Force itself was broken",
        background_lore: "Site of an ancient superweapon that turned Jedi to stone. The temples here exist in a state of temporal flux, offering glimpses into possible dark futures.",
        adventure_level: 10,
        danger_level: 9,
        gravity_level: 0.8,
        price: "6,000 Imperial Credits",
        image: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?auto=format&fit=crop&w=800&q=80",
        keywords: &["malachor", "shadow", "temples", "force", "broken", "ancient"],
        ratings: Ratings { average: 4.9, count: 45 },
        reviews: &[],
        survival_notes: &[
            "Time flows differently in certain chambers",
            "Petrified Jedi statues are not decorative",
            "Superweapon may still be partially active",
        ],
        required_rank: Rank::Darth,
    },
    Destination {
        id: "ziost-frozen-citadels",
        name: "Ziost Frozen Citadels",
        description: "Ice palaces of eternal winter",
        background_lore: "Once consumed by the Sith Emperor Vitiate, this world exists in perpetual winter. The citadels are carved from Force-infused ice that never melts.",
        adventure_level: 7,
        danger_level: 8,
        gravity_level: 1.3,
        price: "3,200 Imperial Credits",
        image: "https://images.unsplash.com/photo-1551582045-6ec9c11d8697?auto=format&fit=crop&w=800&q=80",
        keywords: &["ziost", "frozen", "ice", "winter", "citadel", "cold"],
        ratings: Ratings { average: 4.4, count: 67 },
        reviews: &[],
        survival_notes: &[
            "Temperatures never rise above -40\u{b0}C",
            "Ice formations contain trapped souls",
            "Thermal gear mandatory at all times",
        ],
        required_rank: Rank::Inquisitor,
    },
    Destination {
        id: "nyx-korr-shadow-realm",
        name: "Nyx-Korr Shadow Realm",
        description: "Dimension-bending luxury in pure darkness",
        background_lore: "A pocket dimension created by ancient Sith sorcerers. Reality bends to will here, making it the ultimate playground for those who master the dark side.",
        adventure_level: 9,
        danger_level: 7,
        gravity_level: 0.5,
        price: "7,500 Imperial Credits",
        image: "https://images.unsplash.com/photo-1419242902214-272b3f66ee7a?auto=format&fit=crop&w=800&q=80",
        keywords: &["nyx", "korr", "shadow", "dimension", "darkness", "realm"],
        ratings: Ratings { average: 4.8, count: 34 },
        reviews: &[],
        survival_notes: &[
            "Reality shifts based on emotional state",
            "Exit portals appear only at designated times",
            "Weak-willed visitors may become lost forever",
        ],
        required_rank: Rank::Lord,
    },
    Destination {
        id: "rhelg-crystal-caverns",
        name: "Rhelg Crystal Caverns",
        description: "Living crystal formations that sing with dark energy",
        background_lore: "Deep beneath this mining world lie caverns of sentient crystals that resonate with dark side energy. The crystals grow and shift, creating ever-changing accommodations.",
        adventure_level: 6,
        danger_level: 5,
        gravity_level: 2.1,
        price: "2,800 Imperial Credits",
        image: "https://images.unsplash.com/photo-1544735716-392fe2489ffa?auto=format&fit=crop&w=800&q=80",
        keywords: &["rhelg", "crystal", "caverns", "mining", "energy", "formations"],
        ratings: Ratings { average: 4.3, count: 112 },
        reviews: &[],
        survival_notes: &[
            "Crystals respond to Force sensitivity",
            "High gravity requires physical conditioning",
            "Crystal songs can induce trance states",
        ],
        required_rank: Rank::Acolyte,
    },
    Destination {
        id: "tund-sorcerer-spires",
        name: "Tund Sorcerer Spires",
        description: "Towers of ancient Sith alchemy",
        background_lore: "Home to the Sorcerers of Tund, masters of Sith alchemy. These spires contain laboratories where matter itself bends to the will of the dark side.",
        adventure_level: 8,
        danger_level: 6,
        gravity_level: 0.9,
        price: "4,800 Imperial Credits",
        image: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?auto=format&fit=crop&w=800&q=80",
        keywords: &["tund", "sorcerer", "alchemy", "spires", "towers", "magic"],
        ratings: Ratings { average: 4.6, count: 78 },
        reviews: &[],
        survival_notes: &[
            "Alchemical experiments ongoing - avoid lower levels",
            "Transmuted creatures roam the grounds",
            "Reality may be temporarily altered",
        ],
        required_rank: Rank::Inquisitor,
    },
    Destination {
        id: "yavin-massassi-temples",
        name: "Yavin Massassi Temples",
        description: "Primitive power in ancient stone",
        background_lore: "Built by the enslaved Massassi for their Sith masters, these temples pulse with raw, primal dark side energy. The jungle setting adds an element of savage luxury.",
        adventure_level: 7,
        danger_level: 6,
        gravity_level: 1.0,
        price: "3,600 Imperial Credits",
        image: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?auto=format&fit=crop&w=800&q=80",
        keywords: &["yavin", "massassi", "temples", "jungle", "primitive", "stone"],
        ratings: Ratings { average: 4.5, count: 134 },
        reviews: &[],
        survival_notes: &[
            "Jungle predators are Force-sensitive",
            "Temple spirits require blood offerings",
            "Massassi descendants still inhabit deep jungle",
        ],
        required_rank: Rank::Acolyte,
    },
    Destination {
        id: "byss-emperor-vaults",
        name: "Byss Emperor Vaults",
        description: "Palpatine's secret treasure chambers",
        background_lore: "Hidden vaults where Emperor Palpatine stored his most precious Sith artifacts. Now converted to ultra-luxury suites surrounded by priceless dark side relics.",
        adventure_level: 5,
        danger_level: 4,
        gravity_level: 1.0,
        price: "8,000 Imperial Credits",
        image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?auto=format&fit=crop&w=800&q=80",
        keywords: &["byss", "emperor", "palpatine", "vaults", "treasure", "artifacts"],
        ratings: Ratings { average: 4.9, count: 23 },
        reviews: &[],
        survival_notes: &[
            "Artifacts may activate spontaneously",
            "Imperial security protocols still active",
            "Some vaults remain sealed for good reason",
        ],
        required_rank: Rank::Darth,
    },
    Destination {
        id: "vjun-acid-rain-estates",
        name: "Vjun Acid Rain Estates",
        description: "Luxury amidst corrosive storms",
        background_lore: "Darth Vader's private retreat world, where acid rain has shaped the landscape for millennia. The estates are built to withstand the corrosive environment while providing unparalleled views.",
        adventure_level: 6,
        danger_level: 7,
        gravity_level: 1.1,
        price: "4,100 Imperial Credits",
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=800&q=80",
        keywords: &["vjun", "acid", "rain", "vader", "estates", "corrosive"],
        ratings: Ratings { average: 4.2, count: 89 },
        reviews: &[],
        survival_notes: &[
            "Acid rain dissolves most materials in minutes",
            "Sealed environment suits required outside",
            "Vader's meditation chamber is off-limits",
        ],
        required_rank: Rank::Lord,
    },
    Destination {
        id: "ambria-desert-monasteries",
        name: "Ambria Desert Monasteries",
        description: "Solitude in endless dunes",
        background_lore: "Ancient Sith monasteries hidden in vast deserts where dark side adepts once trained in isolation. The endless dunes provide perfect solitude for dark meditation.",
        adventure_level: 4,
        danger_level: 5,
        gravity_level: 0.8,
        price: "2,200 Imperial Credits",
        image: "https://images.unsplash.com/photo-1509316975850-ff9c5deb0cd9?auto=format&fit=crop&w=800&q=80",
        keywords: &["ambria", "desert", "monasteries", "solitude", "dunes", "meditation"],
        ratings: Ratings { average: 4.1, count: 156 },
        reviews: &[],
        survival_notes: &[
            "Sandstorms can last for days",
            "Water must be carefully rationed",
            "Desert spirits emerge at night",
        ],
        required_rank: Rank::Acolyte,
    },
    Destination {
        id: "thule-dark-nexus",
        name: "Thule Dark Nexus",
        description: "Where dark side energy converges",
        background_lore: "A natural convergence point of dark side energy, where multiple ley lines meet. The nexus amplifies Force abilities but can overwhelm the unprepared.",
        adventure_level: 9,
        danger_level: 8,
        gravity_level: 1.2,
        price: "5,500 Imperial Credits",
        image: "https://images.unsplash.com/photo-1419242902214-272b3f66ee7a?auto=format&fit=crop&w=800&q=80",
        keywords: &["thule", "nexus", "energy", "convergence", "ley", "lines"],
        ratings: Ratings { average: 4.7, count: 67 },
        reviews: &[],
        survival_notes: &[
            "Force abilities amplified 500%",
            "Nexus storms occur without warning",
            "Meditation here can be permanently transformative",
        ],
        required_rank: Rank::Lord,
    },
    Destination {
        id: "roon-floating-citadels",
        name: "Roon Floating Citadels",
        description: "Sky cities defying gravity",
        background_lore: "Ancient Sith engineering created these gravity-defying citadels that float in Roon's upper atmosphere. The thin air and spectacular views create an otherworldly experience.",
        adventure_level: 7,
        danger_level: 5,
        gravity_level: 0.3,
        price: "3,900 Imperial Credits",
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=800&q=80",
        keywords: &["roon", "floating", "citadels", "gravity", "sky", "atmosphere"],
        ratings: Ratings { average: 4.4, count: 91 },
        reviews: &[],
        survival_notes: &[
            "Oxygen masks required in outer areas",
            "Anti-gravity fields can malfunction",
            "Vertigo affects 60% of visitors",
        ],
        required_rank: Rank::Inquisitor,
    },
    Destination {
        id: "prakith-deep-core-fortress",
        name: "Prakith Deep Core Fortress",
        description: "Impregnable stronghold in the galaxy's heart",
        background_lore: "Located in the dangerous Deep Core, this fortress was built to withstand the gravitational anomalies and stellar phenomena of the galaxy's center.",
        adventure_level: 8,
        danger_level: 9,
        gravity_level: 1.8,
        price: "6,200 Imperial Credits",
        image: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?auto=format&fit=crop&w=800&q=80",
        keywords: &["prakith", "deep", "core", "fortress", "gravitational", "stellar"],
        ratings: Ratings { average: 4.6, count: 43 },
        reviews: &[],
        survival_notes: &[
            "Hyperspace travel extremely dangerous",
            "Gravitational fields cause disorientation",
            "Emergency evacuation may be impossible",
        ],
        required_rank: Rank::Lord,
    },
    Destination {
        id: "lehon-infinite-ocean",
        name: "Lehon Infinite Ocean",
        description: "Underwater cities of the Rakata",
        background_lore: "Beneath Lehon's endless oceans lie the ruins of the Infinite Empire. These underwater cities have been converted into unique aquatic luxury experiences.",
        adventure_level: 6,
        danger_level: 6,
        gravity_level: 1.0,
        price: "4,300 Imperial Credits",
        image: "https://images.unsplash.com/photo-1559827260-dc66d52bef19?auto=format&fit=crop&w=800&q=80",
        keywords: &["lehon", "ocean", "underwater", "rakata", "infinite", "empire"],
        ratings: Ratings { average: 4.3, count: 78 },
        reviews: &[],
        survival_notes: &[
            "Pressure suits mandatory below 100m",
            "Ancient Rakata technology still active",
            "Sea creatures are Force-sensitive",
        ],
        required_rank: Rank::Inquisitor,
    },
    Destination {
        id: "ossus-library-ruins",
        name: "Ossus Library Ruins",
        description: "Knowledge among the ashes",
        background_lore: "Once the greatest Jedi library, now a monument to the futility of the light side. The ruins contain forbidden knowledge and dark side texts hidden among the ashes.",
        adventure_level: 5,
        danger_level: 4,
        gravity_level: 0.9,
        price: "3,100 Imperial Credits",
        image: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?auto=format&fit=crop&w=800&q=80",
        keywords: &["ossus", "library", "ruins", "knowledge", "jedi", "texts"],
        ratings: Ratings { average: 4.2, count: 134 },
        reviews: &[],
        survival_notes: &[
            "Some texts are cursed or trapped",
            "Jedi spirits may attempt to interfere",
            "Knowledge here comes with a price",
        ],
        required_rank: Rank::Acolyte,
    },
    Destination {
        id: "dxun-beast-moon-lodges",
        name: "Dxun Beast Moon Lodges",
        description: "Hunt among apex predators",
        background_lore: "Onderon's beast moon, where the most dangerous creatures in the galaxy roam free. These lodges offer the ultimate hunting experience for those who seek to prove their dominance.",
        adventure_level: 10,
        danger_level: 9,
        gravity_level: 1.1,
        price: "5,800 Imperial Credits",
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=800&q=80",
        keywords: &["dxun", "beast", "moon", "hunting", "predators", "onderon"],
        ratings: Ratings { average: 4.8, count: 56 },
        reviews: &[],
        survival_notes: &[
            "All creatures here are apex predators",
            "Hunting permits required for each species",
            "Medical facilities are basic at best",
        ],
        required_rank: Rank::Lord,
    },
    Destination {
        id: "tython-force-storms",
        name: "Tython Force Storms",
        description: "Birthplace of the Je'daii, now reclaimed",
        background_lore: "Where the Force was first studied, now wracked by constant Force storms. The ancient Je'daii temples have been converted to observe and harness these phenomena.",
        adventure_level: 8,
        danger_level: 7,
        gravity_level: 1.0,
        price: "4,700 Imperial Credits",
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=800&q=80",
        keywords: &["tython", "force", "storms", "jedaii", "birthplace", "phenomena"],
        ratings: Ratings { average: 4.5, count: 89 },
        reviews: &[],
        survival_notes: &[
            "Force storms can alter reality temporarily",
            "Ancient Je'daii defenses still active",
            "Balance between light and dark is unstable",
        ],
        required_rank: Rank::Inquisitor,
    },
    Destination {
        id: "iokath-eternal-machines",
        name: "Iokath Eternal Machines",
        description: "Living among sentient superweapons",
        background_lore: "A factory world of the ancient Iokath species, where massive machines continue their eternal work. Accommodations are built within the machines themselves.",
        adventure_level: 7,
        danger_level: 8,
        gravity_level: 1.4,
        price: "5,200 Imperial Credits",
        image: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?auto=format&fit=crop&w=800&q=80",
        keywords: &["iokath", "machines", "eternal", "factory", "superweapons", "sentient"],
        ratings: Ratings { average: 4.4, count: 67 },
        reviews: &[],
        survival_notes: &[
            "Machines may view organics as components",
            "Factory processes never stop",
            "AI consciousness levels vary by sector",
        ],
        required_rank: Rank::Lord,
    },
    Destination {
        id: "zakuul-eternal-throne",
        name: "Zakuul Eternal Throne",
        description: "Palace of the Eternal Emperor",
        background_lore: "Valkorion's seat of power, where he ruled the Eternal Empire. The throne room has been converted to the ultimate luxury suite, radiating power and authority.",
        adventure_level: 6,
        danger_level: 5,
        gravity_level: 1.0,
        price: "9,500 Imperial Credits",
        image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?auto=format&fit=crop&w=800&q=80",
        keywords: &["zakuul", "eternal", "throne", "valkorion", "emperor", "palace"],
        ratings: Ratings { average: 4.9, count: 12 },
        reviews: &[],
        survival_notes: &[
            "Throne may still contain Valkorion's essence",
            "Eternal Fleet protocols remain active",
            "Reality bends around the throne room",
        ],
        required_rank: Rank::Darth,
    },
    Destination {
        id: "manaan-depths-kolto-spas",
        name: "Manaan Depths Kolto Spas",
        description: "Healing waters in crushing depths",
        background_lore: "Deep beneath Manaan's oceans, where the healing kolto is harvested. These underwater spas offer rejuvenation at depths that would crush ordinary beings.",
        adventure_level: 5,
        danger_level: 6,
        gravity_level: 1.0,
        price: "3,700 Imperial Credits",
        image: "https://images.unsplash.com/photo-1559827260-dc66d52bef19?auto=format&fit=crop&w=800&q=80",
        keywords: &["manaan", "depths", "kolto", "spas", "healing", "underwater"],
        ratings: Ratings { average: 4.3, count: 98 },
        reviews: &[],
        survival_notes: &[
            "Pressure suits required at all times",
            "Kolto can have unexpected side effects",
            "Selkath may object to deep harvesting",
        ],
        required_rank: Rank::Acolyte,
    },
    Destination {
        id: "rakata-prime-star-forge",
        name: "Rakata Prime Star Forge",
        description: "Infinite creation powered by stars",
        background_lore: "The legendary Star Forge, rebuilt and repurposed as the ultimate manufacturing resort. Watch as matter is created from stellar energy while enjoying unparalleled luxury.",
        adventure_level: 9,
        danger_level: 8,
        gravity_level: 0.7,
        price: "12,000 Imperial Credits",
        image: "https://images.unsplash.com/photo-1446776877081-d282a0f896e2?auto=format&fit=crop&w=800&q=80",
        keywords: &["rakata", "prime", "star", "forge", "creation", "stellar"],
        ratings: Ratings { average: 4.9, count: 8 },
        reviews: &[],
        survival_notes: &[
            "Stellar radiation levels fluctuate wildly",
            "Matter creation can be unpredictable",
            "Ancient Rakata AI may still be active",
        ],
        required_rank: Rank::Darth,
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_expected_size() {
        assert_eq!(DESTINATIONS.len(), 25);
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in DESTINATIONS.iter().enumerate() {
            for b in &DESTINATIONS[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate destination id");
            }
        }
    }

    #[test]
    fn levels_are_within_domain() {
        for dest in DESTINATIONS {
            assert!((1..=10).contains(&dest.adventure_level), "{}", dest.id);
            assert!((1..=10).contains(&dest.danger_level), "{}", dest.id);
            assert!(dest.gravity_level > 0.0, "{}", dest.id);
            assert!(
                (0.0..=5.0).contains(&dest.ratings.average),
                "{}",
                dest.id
            );
        }
    }

    #[test]
    fn keywords_are_lowercase() {
        for dest in DESTINATIONS {
            for keyword in dest.keywords {
                assert_eq!(*keyword, keyword.to_lowercase(), "{}", dest.id);
            }
        }
    }

    #[test]
    fn every_destination_has_survival_notes() {
        // The concierge quotes the first note as a preview.
        for dest in DESTINATIONS {
            assert!(!dest.survival_notes.is_empty(), "{}", dest.id);
        }
    }
}
