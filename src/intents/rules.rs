use super::{IntentRule, Tier, Trigger};

const COUNT_EXOPLANETS: &str = "As of 2024, we have discovered over 5,000 confirmed exoplanets! This number is constantly growing as new missions like TESS and JWST continue to find more worlds. The first exoplanet around a Sun-like star was discovered in 1995, and we've been finding them at an incredible rate ever since.";
const COUNT_PLANETS: &str = "We've discovered over 5,000 confirmed exoplanets so far! This is just a tiny fraction of what's out there - our galaxy alone likely contains billions of planets. Each discovery helps us understand planetary formation and the potential for life in the universe.";
const LIGHT_CURVE_PATTERN: &str = "A light curve pattern shows how a star's brightness changes over time. In exoplanet detection, we look for periodic dips in brightness that occur when a planet passes in front of its star. These dips are typically small (0.1-1% for Earth-sized planets) and repeat at regular intervals, revealing the planet's orbital period.";
const CONSISTENT_DIP: &str = "To determine if a dip is consistent with an exoplanet transit, look for: 1) Periodic dips (repeating at regular intervals), 2) Symmetric shape (sharp ingress and egress), 3) Appropriate depth (typically 0.1-1% for Earth-sized planets), and 4) Duration that matches the expected transit time for the orbital period.";
const NOISE_VS_SIGNAL: &str = "To distinguish noise from real signals: 1) Real transits are periodic and repeat at regular intervals, 2) Noise is random and irregular, 3) Real signals have consistent depth and shape, 4) Check multiple observations to confirm the pattern, and 5) Use statistical analysis to determine signal-to-noise ratio.";
const GREETING: &str = "Hello! I'm your ExoVet AI assistant. I can help you with exoplanet science, space missions, astronomy, and general questions. What would you like to know?";

/// Every offline rule, in evaluation order. The first rule whose trigger
/// matches wins.
///
/// Tiers are contiguous and ordered: compound question shapes, then specific
/// phrases, then the topic catalog, then broad one-word cues.
pub static RULES: &[IntentRule] = &[
    // Compound question shapes
    IntentRule {
        id: "how-many-exoplanets",
        tier: Tier::Compound,
        trigger: Trigger::AllOf(&["how many", "exoplanet"]),
        answer: COUNT_EXOPLANETS,
    },
    IntentRule {
        id: "how-many-planets",
        tier: Tier::Compound,
        trigger: Trigger::AllOf(&["how many", "planet"]),
        answer: COUNT_PLANETS,
    },
    IntentRule {
        id: "how-many-worlds",
        tier: Tier::Compound,
        trigger: Trigger::AllOf(&["how many", "world"]),
        answer: COUNT_PLANETS,
    },
    IntentRule {
        id: "explain-pattern",
        tier: Tier::Compound,
        trigger: Trigger::AllOf(&["explain", "pattern"]),
        answer: LIGHT_CURVE_PATTERN,
    },
    IntentRule {
        id: "dip-consistent",
        tier: Tier::Compound,
        trigger: Trigger::AllOf(&["dip", "consistent"]),
        answer: CONSISTENT_DIP,
    },
    IntentRule {
        id: "noise-difference",
        tier: Tier::Compound,
        trigger: Trigger::AllOf(&["difference", "noise"]),
        answer: NOISE_VS_SIGNAL,
    },
    IntentRule {
        id: "what-is-exoplanet",
        tier: Tier::Compound,
        trigger: Trigger::AllOf(&["what is", "exoplanet"]),
        answer: "An exoplanet is a planet that orbits a star other than our Sun. We've discovered over 5,000 confirmed exoplanets since 1995, ranging from rocky worlds like Earth to gas giants larger than Jupiter. These discoveries help us understand planetary formation and the potential for life beyond our solar system.",
    },
    IntentRule {
        id: "what-is-transit",
        tier: Tier::Compound,
        trigger: Trigger::AllOf(&["what is", "transit"]),
        answer: "A transit occurs when a planet passes directly between its star and our line of sight, causing a small dip in the star's brightness. This is one of the most successful methods for detecting exoplanets, used by missions like Kepler and TESS to discover thousands of worlds.",
    },
    IntentRule {
        id: "what-is-habitable",
        tier: Tier::Compound,
        trigger: Trigger::AllOf(&["what is", "habitable"]),
        answer: "The habitable zone is the region around a star where conditions might be right for liquid water to exist on a planet's surface. Planets in this zone are prime targets in the search for life, as liquid water is essential for life as we know it.",
    },
    IntentRule {
        id: "what-is-kepler",
        tier: Tier::Compound,
        trigger: Trigger::AllOf(&["what is", "kepler"]),
        answer: "Kepler was NASA's first mission dedicated to finding exoplanets. It discovered over 2,600 confirmed exoplanets by monitoring the brightness of stars for the telltale dimming caused by planetary transits. Kepler revolutionized our understanding of planetary systems.",
    },
    IntentRule {
        id: "what-is-tess",
        tier: Tier::Compound,
        trigger: Trigger::AllOf(&["what is", "tess"]),
        answer: "TESS (Transiting Exoplanet Survey Satellite) is NASA's current planet-hunting mission. It surveys the entire sky to find exoplanets around the nearest and brightest stars, building on Kepler's legacy and discovering new worlds every day.",
    },
    // "light curve" and "lightcurve" both satisfy this pair.
    IntentRule {
        id: "light-curve",
        tier: Tier::Compound,
        trigger: Trigger::AllOf(&["light", "curve"]),
        answer: "A light curve shows how a star's brightness changes over time. During an exoplanet transit, the light curve dips slightly when the planet passes in front of the star, blocking some of its light. The depth of the dip tells us about the planet's size, and the timing reveals its orbital period.",
    },
    IntentRule {
        id: "transit-consistent",
        tier: Tier::Compound,
        trigger: Trigger::AllOf(&["transit", "consistent"]),
        answer: CONSISTENT_DIP,
    },
    IntentRule {
        id: "noise-signal",
        tier: Tier::Compound,
        trigger: Trigger::AllOf(&["noise", "signal"]),
        answer: NOISE_VS_SIGNAL,
    },
    IntentRule {
        id: "candidate-confidence",
        tier: Tier::Compound,
        trigger: Trigger::AllOf(&["confidence", "candidate"]),
        answer: "Confidence in a planet candidate depends on: 1) Signal-to-noise ratio (higher is better), 2) Number of observed transits (more is better), 3) Consistency of transit parameters, 4) Follow-up observations, 5) Ruling out false positives, and 6) Independent confirmation. High confidence requires multiple lines of evidence.",
    },
    // Specific phrases
    IntentRule {
        id: "greeting-hello",
        tier: Tier::Phrase,
        trigger: Trigger::AnyOf(&["hello"]),
        answer: GREETING,
    },
    IntentRule {
        id: "greeting-hi",
        tier: Tier::Phrase,
        trigger: Trigger::Word("hi"),
        answer: GREETING,
    },
    IntentRule {
        id: "greeting-hey",
        tier: Tier::Phrase,
        trigger: Trigger::Word("hey"),
        answer: GREETING,
    },
    IntentRule {
        id: "weather",
        tier: Tier::Phrase,
        trigger: Trigger::AnyOf(&["weather", "temperature"]),
        answer: "I can't provide real-time weather data, but I can tell you about exoplanet atmospheres! Some exoplanets have extreme weather - from scorching hot Jupiters with 1000°C temperatures to frozen worlds colder than Pluto.",
    },
    IntentRule {
        id: "transit-depth",
        tier: Tier::Phrase,
        trigger: Trigger::AnyOf(&["transit depth"]),
        answer: "Transit depth is the percentage decrease in stellar brightness during a transit. It's calculated as (Rp/Rs)² × 100%, where Rp is the planet radius and Rs is the star radius. A 1% depth means the planet blocks 1% of the star's light, indicating a planet about 10% the size of its star.",
    },
    IntentRule {
        id: "false-positive",
        tier: Tier::Phrase,
        trigger: Trigger::AnyOf(&["false positive"]),
        answer: "Common false positives include: 1) Eclipsing binary stars (two stars orbiting each other), 2) Stellar spots or activity, 3) Instrumental noise, 4) Background eclipsing binaries, 5) Grazing eclipses, and 6) Stellar variability. Always verify with follow-up observations and radial velocity measurements.",
    },
    IntentRule {
        id: "kepler-22b",
        tier: Tier::Phrase,
        trigger: Trigger::AnyOf(&["kepler-22b", "kepler 22b"]),
        answer: "Kepler-22b is a confirmed exoplanet in the habitable zone of a Sun-like star. Its light curve shows a clear, periodic dip of about 0.1% depth every 290 days. The transit is symmetric and consistent, making it a perfect example of a confirmed exoplanet detection.",
    },
    IntentRule {
        id: "eclipsing-binary",
        tier: Tier::Phrase,
        trigger: Trigger::AnyOf(&["eclipsing binary"]),
        answer: "Eclipsing binaries are two stars orbiting each other, causing periodic dips in brightness. They can mimic exoplanet transits but typically show: 1) Deeper dips (often >10%), 2) Different light curve shapes, 3) Secondary eclipses, 4) Color changes, and 5) Radial velocity variations. Careful analysis can distinguish them from planetary transits.",
    },
    IntentRule {
        id: "step-by-step",
        tier: Tier::Phrase,
        trigger: Trigger::AnyOf(&["step-by-step", "step by step"]),
        answer: "Astronomers confirm exoplanets through: 1) Initial detection (transit or radial velocity), 2) Follow-up observations, 3) Ruling out false positives, 4) Independent confirmation, 5) Detailed characterization, and 6) Publication and peer review. Each step requires careful analysis and multiple verification methods.",
    },
    // Topic catalog
    IntentRule {
        id: "topic-exoplanet-transit",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["exoplanet transit"]),
        answer: "An exoplanet transit occurs when a planet passes directly between its star and our line of sight, causing a small dip in the star's brightness. This is one of the most successful methods for detecting exoplanets, used by missions like Kepler and TESS.",
    },
    IntentRule {
        id: "topic-transit-method",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["transit method"]),
        answer: "The transit method detects exoplanets by measuring the periodic dimming of a star when a planet passes in front of it. The amount of dimming tells us about the planet's size, and the timing reveals its orbital period.",
    },
    IntentRule {
        id: "topic-exoplanet",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["exoplanet"]),
        answer: "Exoplanets are planets that orbit stars other than our Sun. Since the first discovery in 1995, we've found over 5,000 confirmed exoplanets using various detection methods including transit photometry, radial velocity, and direct imaging.",
    },
    IntentRule {
        id: "topic-kepler",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["kepler"]),
        answer: "The Kepler Space Telescope was NASA's first mission dedicated to finding exoplanets. It discovered over 2,600 confirmed exoplanets by monitoring the brightness of stars for the telltale dimming caused by planetary transits.",
    },
    IntentRule {
        id: "topic-tess",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["tess"]),
        answer: "TESS (Transiting Exoplanet Survey Satellite) is NASA's current planet-hunting mission. It surveys the entire sky to find exoplanets around the nearest and brightest stars, building on Kepler's legacy.",
    },
    IntentRule {
        id: "topic-habitable-zone",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["habitable zone"]),
        answer: "The habitable zone is the region around a star where conditions might be right for liquid water to exist on a planet's surface. Planets in this zone are prime targets in the search for life beyond Earth.",
    },
    IntentRule {
        id: "topic-radial-velocity",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["radial velocity"]),
        answer: "The radial velocity method detects exoplanets by measuring the wobble of a star caused by the gravitational pull of an orbiting planet. This technique was used to discover the first exoplanet around a Sun-like star in 1995.",
    },
    IntentRule {
        id: "topic-direct-imaging",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["direct imaging"]),
        answer: "Direct imaging involves taking actual pictures of exoplanets by blocking out the light from their host stars. This method is most effective for large, young planets that are far from their stars.",
    },
    IntentRule {
        id: "topic-atmosphere",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["atmosphere"]),
        answer: "Exoplanet atmospheres are studied by analyzing the light that passes through them during transits. This reveals the chemical composition and can indicate the presence of water, methane, and other molecules.",
    },
    IntentRule {
        id: "topic-biosignature",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["biosignature"]),
        answer: "Biosignatures are chemical or physical signs that could indicate the presence of life on an exoplanet. These include oxygen, methane, and other gases that might be produced by living organisms.",
    },
    IntentRule {
        id: "topic-goldilocks-zone",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["goldilocks zone"]),
        answer: "The Goldilocks zone (habitable zone) is the region around a star where temperatures are just right for liquid water to exist on a planet's surface - not too hot, not too cold.",
    },
    IntentRule {
        id: "topic-super-earth",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["super earth"]),
        answer: "Super-Earths are planets with masses between Earth and Neptune. They are among the most common types of exoplanets discovered and may have diverse compositions and atmospheres.",
    },
    IntentRule {
        id: "topic-hot-jupiter",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["hot jupiter"]),
        answer: "Hot Jupiters are gas giant planets that orbit very close to their stars, with orbital periods of just a few days. They are easier to detect but challenge our understanding of planetary formation.",
    },
    IntentRule {
        id: "topic-spectroscopy",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["spectroscopy"]),
        answer: "Spectroscopy analyzes the light from exoplanets to determine their atmospheric composition, temperature, and other physical properties.",
    },
    IntentRule {
        id: "topic-microlensing",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["microlensing"]),
        answer: "Gravitational microlensing detects exoplanets by observing how their gravity bends and magnifies light from background stars.",
    },
    IntentRule {
        id: "topic-pulsar-planet",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["pulsar planet"]),
        answer: "The first exoplanets were discovered around a pulsar in 1992, proving that planets can exist in extreme environments.",
    },
    IntentRule {
        id: "topic-rogue-planet",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["rogue planet"]),
        answer: "Rogue planets are worlds that don't orbit any star. They drift through space alone and are detected through gravitational microlensing.",
    },
    IntentRule {
        id: "topic-tidally-locked",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["tidally locked"]),
        answer: "Many exoplanets are tidally locked, meaning one side always faces their star while the other side remains in perpetual darkness.",
    },
    IntentRule {
        id: "topic-magnetic-field",
        tier: Tier::Topic,
        trigger: Trigger::AnyOf(&["magnetic field"]),
        answer: "Exoplanet magnetic fields protect atmospheres from stellar winds and may be crucial for habitability.",
    },
    // Broad cues
    IntentRule {
        id: "cue-time",
        tier: Tier::Cue,
        trigger: Trigger::AnyOf(&["time", "date"]),
        answer: "I don't have access to real-time data, but I can tell you about exoplanet orbital periods! Some planets orbit their stars in just hours, while others take thousands of years. The time it takes depends on the planet's distance from its star.",
    },
    IntentRule {
        id: "cue-math",
        tier: Tier::Cue,
        trigger: Trigger::AnyOf(&["math", "calculate", "equation"]),
        answer: "I can help with exoplanet calculations! For example, to find a planet's orbital period: P² = a³ (where P is in years and a is in AU). I can also explain how we calculate planet sizes, masses, and distances from their stars.",
    },
    IntentRule {
        id: "cue-cosmos",
        tier: Tier::Cue,
        trigger: Trigger::AnyOf(&["space", "universe", "galaxy"]),
        answer: "The universe is vast! Our galaxy alone contains billions of stars, and many have planets. We've discovered over 5,000 exoplanets so far, and there are likely trillions more waiting to be found. Each discovery helps us understand our place in the cosmos.",
    },
    IntentRule {
        id: "cue-life",
        tier: Tier::Cue,
        trigger: Trigger::AnyOf(&["life", "alien", "extraterrestrial"]),
        answer: "The search for life is one of the most exciting aspects of exoplanet research! We look for biosignatures like oxygen, methane, and water in exoplanet atmospheres. The habitable zone around stars is where conditions might be right for life as we know it.",
    },
    IntentRule {
        id: "cue-earth",
        tier: Tier::Cue,
        trigger: Trigger::AnyOf(&["earth", "planet"]),
        answer: "Earth is our reference point for understanding exoplanets! We compare other worlds to Earth to understand habitability. Some exoplanets are \"super-Earths\" - larger than Earth but smaller than Neptune. Others are \"Earth-like\" in size and temperature.",
    },
    IntentRule {
        id: "cue-star",
        tier: Tier::Cue,
        trigger: Trigger::AnyOf(&["star", "sun"]),
        answer: "Stars are the key to exoplanet systems! Different types of stars (red dwarfs, sun-like stars, giants) create different environments for planets. Our Sun is a G-type star, and we've found planets around stars of all types.",
    },
    IntentRule {
        id: "cue-telescope",
        tier: Tier::Cue,
        trigger: Trigger::AnyOf(&["telescope", "observe", "see"]),
        answer: "Telescopes are our windows to the universe! Space telescopes like Kepler, TESS, and JWST have revolutionized exoplanet discovery. Ground-based telescopes also play a crucial role in confirming and studying exoplanets.",
    },
    IntentRule {
        id: "cue-how",
        tier: Tier::Cue,
        trigger: Trigger::AnyOf(&["how"]),
        answer: "Great question! The methods for detecting exoplanets include the transit method (measuring star dimming), radial velocity (detecting stellar wobble), direct imaging (taking pictures), and gravitational microlensing. Each method reveals different information about the planets.",
    },
    IntentRule {
        id: "cue-why",
        tier: Tier::Cue,
        trigger: Trigger::AnyOf(&["why"]),
        answer: "Excellent question! We study exoplanets to understand planetary formation, search for habitable worlds, and answer the fundamental question: \"Are we alone in the universe?\" Each discovery helps us understand our own solar system better.",
    },
    IntentRule {
        id: "cue-when",
        tier: Tier::Cue,
        trigger: Trigger::AnyOf(&["when", "discovered"]),
        answer: "The first exoplanet around a Sun-like star was discovered in 1995 using the radial velocity method. Since then, we've found over 5,000 confirmed exoplanets using various detection techniques.",
    },
    IntentRule {
        id: "cue-where",
        tier: Tier::Cue,
        trigger: Trigger::AnyOf(&["where", "find"]),
        answer: "Exoplanets are found throughout our galaxy and beyond! The Kepler mission discovered thousands in a small patch of sky, while TESS is surveying the entire sky to find planets around the nearest and brightest stars.",
    },
];
