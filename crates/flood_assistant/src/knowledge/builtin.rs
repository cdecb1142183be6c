//! Embedded flood-safety FAQ table.
//!
//! Declaration order is significant: the matcher stops at the first entry
//! with a keyword hit, so "alert" in the warning entry also catches questions
//! meant for the "alerts" entry further down.

/// Greeting appended when an empty session is first opened.
pub const WELCOME_MESSAGE: &str = "Hello, I am your <strong>AI Disaster Assistant</strong>. \
You can ask about flood preparedness, emergency kits, and safety steps. \
Select a question below or type your own.";

/// Generic guidance returned when no keyword rule matches.
pub const FALLBACK_ANSWER: &str = "<strong>I did not find an exact match for your question, but here is general flood safety guidance:</strong><br><br>
1. Move to a safe, higher location if there is any risk of water entering your area.<br>
2. Keep your phone charged and emergency numbers handy (112 and state control room).<br>
3. Avoid walking or driving through moving water.<br>
4. Listen to official instructions from local authorities and follow them promptly.<br><br>
You can also tap one of the suggested questions inside the assistant for more specific guidance.";

/// (question, keywords, answer)
pub(crate) type FaqRow = (&'static str, &'static [&'static str], &'static str);

pub(crate) const FAQ: &[FaqRow] = &[
    (
        "What should I do immediately if my area receives a flood warning?",
        &["warning", "alert", "immediately", "now", "sirens"],
        "<strong>Immediate steps during a flood warning:</strong><br><br>
1. Move yourself and your family to higher ground or a safe upper floor.<br>
2. Keep your phone charged and a power bank ready.<br>
3. Switch off main electrical supply if water is entering the house.<br>
4. Pack your emergency kit (documents, medicines, water, basic food).<br>
5. Follow only official messages from government/relief agencies, avoid rumours.",
    ),
    (
        "What should I pack in a flood emergency kit?",
        &["emergency kit", "bag", "pack", "go bag"],
        "<strong>Essential items for a flood emergency kit:</strong><br><br>
1. Copies of ID, bank passbook, and important documents in a waterproof cover.<br>
2. Drinking water (at least 2-3 litres per person) and dry food/snacks.<br>
3. Basic medicines, first-aid items, and any personal prescription medicines.<br>
4. Torch, extra batteries, power bank, and a basic phone charger.<br>
5. Extra clothes, raincoat, small towel, and essential toiletries.<br>
6. Some cash in small denominations in case ATMs are not available.",
    ),
    (
        "How can I prepare my home before the monsoon season?",
        &["prepare home", "monsoon", "before rain", "preparation"],
        "<strong>Preparing your home before monsoon:</strong><br><br>
1. Check and clear drains, roof outlets, and balcony pipes so water can flow freely.<br>
2. Move important documents and electronics to higher shelves or top floors.<br>
3. Store drinking water in clean containers as a backup.<br>
4. Keep sandbags or bricks ready if your entrance is at low level.<br>
5. Save emergency numbers in your phone and note them on paper as well.<br>
6. Discuss a simple family plan: where to go and whom to call in an emergency.",
    ),
    (
        "How do I stay safe if I am already in floodwater?",
        &["already in water", "stuck in water", "inside flood", "floodwater"],
        "<strong>If you are already in floodwater:</strong><br><br>
1. Avoid moving through fast-flowing water; even shallow water can be dangerous.<br>
2. Do not step into water where you cannot see the ground, there may be open drains or holes.<br>
3. Stay away from electric poles, wires, and transformers, there is shock risk.<br>
4. If water is rising inside a building, move to higher floors and call for help.<br>
5. If you are in a vehicle, do not try to drive through deep water; park safely and move to higher ground if possible.",
    ),
    (
        "What should I do if power goes out during heavy rain?",
        &["power cut", "electricity", "power outage", "light gone"],
        "<strong>During a power cut in heavy rain:</strong><br><br>
1. Use torches or battery lights instead of open flames wherever possible.<br>
2. Unplug non-essential electrical devices to protect them from voltage spikes.<br>
3. Keep your phone on battery-saving mode so you can make calls if needed.<br>
4. Do not touch wet switches or exposed wiring.<br>
5. Listen to battery-powered radio/phone alerts for official updates if available.",
    ),
    (
        "How can I protect important documents during floods?",
        &["documents", "aadhar", "paper", "files"],
        "<strong>Protecting important documents:</strong><br><br>
1. Keep original documents (ID, property papers, certificates) in a waterproof folder or zip-lock bag.<br>
2. Store them on a higher shelf or an upper floor, away from possible water entry.<br>
3. Take clear photos or scans and store them securely on your phone and in cloud storage if possible.<br>
4. Keep one small set of photocopies in your emergency kit for quick use.",
    ),
    (
        "What should I do after the flood water recedes?",
        &["after flood", "water recedes", "post flood"],
        "<strong>After the water recedes:</strong><br><br>
1. Return home only when authorities say it is safe to do so.<br>
2. Check walls, ceilings, and wiring for visible damage before switching on power.<br>
3. Do not use food items that came in contact with floodwater.<br>
4. Boil drinking water or use safe packaged water until supply is confirmed safe.<br>
5. Take photographs of damage for insurance or relief claim purposes, if applicable.",
    ),
    (
        "How can I help elderly or disabled family members in a flood?",
        &["elderly", "disabled", "senior", "family help"],
        "<strong>Supporting elderly or disabled family members:</strong><br><br>
1. Plan evacuation early, do not wait for water to rise before moving them.<br>
2. Keep their regular medicines, doctor contact, and ID copies in the emergency kit.<br>
3. Assign one responsible person to stay with them continuously during movement.<br>
4. Use wheelchairs, walking aids, or simple chairs as support while moving to safer areas.<br>
5. Inform local volunteers/relief teams if anyone needs special medical help.",
    ),
    (
        "How do I stay informed about official flood alerts?",
        &["alerts", "information", "news", "official"],
        "<strong>Staying informed about flood alerts:</strong><br><br>
1. Follow only official sources such as state disaster management, IMD, or district administration handles.<br>
2. Keep SMS alerts active on your phone; avoid blocking government alert messages.<br>
3. Radio and local news channels can be useful when mobile data is weak.<br>
4. Do not forward unverified messages on social media, confirm before sharing.",
    ),
    (
        "What should I teach children about flood safety?",
        &["children", "kids", "teach", "family safety"],
        "<strong>Teaching children about flood safety:</strong><br><br>
1. Explain in simple language what floods are and why moving to higher ground is important.<br>
2. Show them where the emergency kit is kept and which adults to listen to in an emergency.<br>
3. Tell them never to play in floodwater or near drains and flowing water.<br>
4. Practice a small family drill: where to go and how to leave the house safely.<br>
5. Reassure them and stay calm, children copy adults' behaviour during emergencies.",
    ),
];
