//! Static demo data backing the showcase screens.

use chrono::Utc;
use uuid::Uuid;

use crate::commission::DealType;
use crate::i18n::Language;

use super::{ArticlePost, ContactInfo, Property, PropertyStatus, PropertyType, Service};

fn office_contact() -> ContactInfo {
    ContactInfo {
        name: "דוד לוי".to_string(),
        phone: crate::contact::OFFICE_PHONE.to_string(),
        email: crate::contact::OFFICE_EMAIL.to_string(),
    }
}

fn localized(language: Language, he: &str, en: &str) -> String {
    match language {
        Language::Hebrew => he.to_string(),
        Language::English => en.to_string(),
    }
}

/// Demo property listings for the active language.
pub fn properties(language: Language) -> Vec<Property> {
    let now = Utc::now();
    let l = |he: &str, en: &str| localized(language, he, en);

    vec![
        Property {
            id: Uuid::new_v4(),
            title: l("משרדים במגדל עזריאלי", "Offices in the Azrieli Tower"),
            description: l(
                "קומת משרדים מרוהטת ומוכנה לאכלוס מיידי, נוף פתוח לים",
                "A furnished office floor ready for immediate occupancy, open sea view",
            ),
            property_type: PropertyType::Office,
            status: PropertyStatus::Rent,
            price: 85_000.0,
            area_sqm: 850.0,
            location: l("תל-אביב", "Tel Aviv"),
            address: l("דרך בגין 132, תל-אביב", "132 Begin Rd., Tel Aviv"),
            features: vec![
                l("חניון תת-קרקעי", "Underground parking"),
                l("לובי מפואר", "Grand lobby"),
                l("ממ\"ד בכל קומה", "Shelter on every floor"),
            ],
            images: vec!["assets/properties/azrieli.jpg".to_string()],
            contact: office_contact(),
            created_at: now,
            updated_at: now,
        },
        Property {
            id: Uuid::new_v4(),
            title: l("חנות דגל ברחוב דיזנגוף", "Flagship store on Dizengoff St."),
            description: l(
                "שטח מסחרי בחזית ראשית עם תנועת קונים ערה לאורך כל היום",
                "Prime-frontage retail space with heavy foot traffic all day",
            ),
            property_type: PropertyType::Commercial,
            status: PropertyStatus::Rent,
            price: 42_000.0,
            area_sqm: 210.0,
            location: l("תל-אביב", "Tel Aviv"),
            address: l("דיזנגוף 99, תל-אביב", "99 Dizengoff St., Tel Aviv"),
            features: vec![
                l("חלון ראווה כפול", "Double display window"),
                l("גובה תקרה 4.5 מטר", "4.5 m ceiling height"),
            ],
            images: vec!["assets/properties/dizengoff.jpg".to_string()],
            contact: office_contact(),
            created_at: now,
            updated_at: now,
        },
        Property {
            id: Uuid::new_v4(),
            title: l("בניין משרדים בהרצליה פיתוח", "Office building in Herzliya Pituach"),
            description: l(
                "בניין בוטיק בן 6 קומות, מושכר במלואו לחברות טכנולוגיה",
                "A 6-floor boutique building, fully leased to technology companies",
            ),
            property_type: PropertyType::Building,
            status: PropertyStatus::Sale,
            price: 96_000_000.0,
            area_sqm: 4_800.0,
            location: l("הרצליה", "Herzliya"),
            address: l("אבא אבן 10, הרצליה", "10 Abba Eban Blvd., Herzliya"),
            features: vec![
                l("תשואה שנתית 6.2%", "6.2% yearly yield"),
                l("120 מקומות חניה", "120 parking spots"),
            ],
            images: vec!["assets/properties/herzliya.jpg".to_string()],
            contact: office_contact(),
            created_at: now,
            updated_at: now,
        },
        Property {
            id: Uuid::new_v4(),
            title: l("משרדים להייטק בבורסה", "High-tech offices near the Exchange"),
            description: l(
                "קומה גבוהה במתחם הבורסה ברמת גן, מטבחון וחדרי ישיבות מאובזרים",
                "High floor in the Ramat Gan exchange district, kitchenette and equipped meeting rooms",
            ),
            property_type: PropertyType::Office,
            status: PropertyStatus::Sale,
            price: 18_500_000.0,
            area_sqm: 620.0,
            location: l("רמת גן", "Ramat Gan"),
            address: l("מנחם בגין 7, רמת גן", "7 Menachem Begin Rd., Ramat Gan"),
            features: vec![
                l("3 כיווני אוויר", "Three exposures"),
                l("גישה ישירה לרכבת", "Direct train access"),
            ],
            images: vec!["assets/properties/bursa.jpg".to_string()],
            contact: office_contact(),
            created_at: now,
            updated_at: now,
        },
        Property {
            id: Uuid::new_v4(),
            title: l("מרכז מסחרי שכונתי בנתניה", "Neighborhood retail center in Netanya"),
            description: l(
                "מרכז מסחרי מניב עם עוגן של רשת מזון ארצית",
                "Income-producing retail center anchored by a national grocery chain",
            ),
            property_type: PropertyType::Commercial,
            status: PropertyStatus::Sold,
            price: 54_000_000.0,
            area_sqm: 3_200.0,
            location: l("נתניה", "Netanya"),
            address: l("שדרות בן גוריון 45, נתניה", "45 Ben Gurion Blvd., Netanya"),
            features: vec![l("עוגן מזון 20 שנה", "20-year grocery anchor")],
            images: vec!["assets/properties/netanya.jpg".to_string()],
            contact: office_contact(),
            created_at: now,
            updated_at: now,
        },
    ]
}

/// Brokerage service lines for the active language.
pub fn services(language: Language) -> Vec<Service> {
    let l = |he: &str, en: &str| localized(language, he, en);

    vec![
        Service {
            id: Uuid::new_v4(),
            name: l("השכרת משרדים", "Office leasing"),
            description: l(
                "איתור משרדים, ניהול משא ומתן וליווי עד לחתימה",
                "Office sourcing, negotiation and guidance through signing",
            ),
            deal_type: DealType::Rent,
            property_type: PropertyType::Office,
            commission: 1.0,
            features: vec![
                l("סיורים מרוכזים", "Curated tours"),
                l("השוואת חוזים", "Lease comparison"),
            ],
        },
        Service {
            id: Uuid::new_v4(),
            name: l("השכרת שטחי מסחר", "Retail leasing"),
            description: l(
                "התאמת שטח מסחרי לקהל היעד ולתמהיל הסביבתי",
                "Matching retail space to the target audience and tenant mix",
            ),
            deal_type: DealType::Rent,
            property_type: PropertyType::Commercial,
            commission: 1.0,
            features: vec![l("ניתוח תנועת קונים", "Foot-traffic analysis")],
        },
        Service {
            id: Uuid::new_v4(),
            name: l("מכירת משרדים ונכסים מסחריים", "Office & commercial sales"),
            description: l(
                "שיווק ממוקד למשקיעים ולחברות, עד לסגירת העסקה",
                "Targeted marketing to investors and companies through closing",
            ),
            deal_type: DealType::Sale,
            property_type: PropertyType::Office,
            commission: 1.5,
            features: vec![l("הערכת שווי מבוססת נתונים", "Data-driven valuation")],
        },
        Service {
            id: Uuid::new_v4(),
            name: l("מכירת בניינים מניבים", "Whole-building sales"),
            description: l(
                "עסקאות מורכבות של בניינים שלמים ונכסים מניבים",
                "Complex transactions for whole buildings and income-producing assets",
            ),
            deal_type: DealType::Sale,
            property_type: PropertyType::Building,
            commission: 2.0,
            features: vec![l("בדיקת נאותות מלאה", "Full due diligence")],
        },
    ]
}

/// Published articles for the active language.
pub fn articles(language: Language) -> Vec<ArticlePost> {
    let now = Utc::now();
    let l = |he: &str, en: &str| localized(language, he, en);

    vec![
        ArticlePost {
            id: Uuid::new_v4(),
            title: l(
                "לאן נושבת הרוח בשוק המשרדים בתל-אביב",
                "Where the Tel Aviv office market is heading",
            ),
            excerpt: l(
                "היצע המשרדים גדל, אבל הביקוש באזורי הפריים לא נחלש",
                "Office supply is growing, but prime-area demand is not letting up",
            ),
            content: l(
                "בשנתיים האחרונות נוספו לתל-אביב מאות אלפי מ\"ר של שטחי משרדים חדשים. למרות זאת, מחירי השכירות באזורי הביקוש נשארו יציבים, והפער בין מגדלי הפריים לשאר השוק רק מתרחב.",
                "Hundreds of thousands of square meters of new office space entered Tel Aviv over the last two years. Even so, rents in prime districts held steady, and the gap between prime towers and the rest of the market keeps widening.",
            ),
            author: l("דוד לוי", "David Levi"),
            category: l("ניתוח שוק", "Market analysis"),
            tags: vec![l("משרדים", "Offices"), l("תל-אביב", "Tel Aviv")],
            image: "assets/articles/offices.jpg".to_string(),
            published: true,
            created_at: now,
            updated_at: now,
        },
        ArticlePost {
            id: Uuid::new_v4(),
            title: l(
                "מדריך: כך בוחרים שטח מסחרי לעסק",
                "Guide: choosing retail space for your business",
            ),
            excerpt: l(
                "מיקום, חשיפה, תמהיל שכנים ותנאי חוזה - מה באמת חשוב",
                "Location, exposure, tenant mix and lease terms - what actually matters",
            ),
            content: l(
                "בחירת שטח מסחרי היא אחת ההחלטות המשמעותיות ביותר לעסק קמעונאי. במדריך הזה נעבור על הפרמטרים המרכזיים: תנועת קונים, נראות מהרחוב, שכנים משלימים, ותנאי החוזה שחובה לשים לב אליהם.",
                "Choosing retail space is one of the most consequential decisions a retail business makes. This guide walks through the key parameters: foot traffic, street visibility, complementary neighbors, and the lease terms you must not overlook.",
            ),
            author: l("מיכל כהן", "Michal Cohen"),
            category: l("מדריכים", "Guides"),
            tags: vec![l("מסחרי", "Retail")],
            image: "assets/articles/retail.jpg".to_string(),
            published: true,
            created_at: now,
            updated_at: now,
        },
        ArticlePost {
            id: Uuid::new_v4(),
            title: l(
                "תשואות נדל\"ן מניב: מה סביר לצפות ב-2026",
                "Income-property yields: what to expect in 2026",
            ),
            excerpt: l(
                "סביבת הריבית משנה את חשבון התשואה של משקיעי הנדל\"ן המסחרי",
                "The rate environment is reshaping commercial investors' yield math",
            ),
            content: l(
                "אחרי תקופה ארוכה של ריבית גבוהה, משקיעים חוזרים לבחון נכסים מניבים. נסקור את טווחי התשואה המקובלים היום לפי סוג נכס ואזור, ואת הפרמטרים שמצדיקים פרמיה.",
                "After an extended period of high rates, investors are taking a fresh look at income-producing assets. We review today's typical yield ranges by asset type and region, and the parameters that justify paying a premium.",
            ),
            author: l("דוד לוי", "David Levi"),
            category: l("השקעות", "Investment"),
            tags: vec![l("תשואה", "Yield"), l("מניב", "Income property")],
            image: "assets/articles/yields.jpg".to_string(),
            published: true,
            created_at: now,
            updated_at: now,
        },
    ]
}
