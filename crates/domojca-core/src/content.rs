//! Localized content records: events, sermons, ministries and service times.
//!
//! Every provider returns the same number of records, in the same order, for
//! every language; only the display strings differ.

use serde::{Deserialize, Serialize};

use crate::types::Language;

/// An upcoming church event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub image: Option<String>,
}

/// A recorded sermon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sermon {
    pub id: u32,
    pub title: String,
    pub speaker: String,
    pub date: String,
    pub video_url: Option<String>,
    pub duration: String,
}

/// Icon identifier attached to a ministry. Resolved to a glyph by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinistryIcon {
    Heart,
    Flame,
    Users,
    HandHeart,
}

/// A ministry (area of service) of the church.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ministry {
    pub title: String,
    pub description: String,
    pub icon: MinistryIcon,
}

/// A regular weekly meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceTime {
    pub day: String,
    pub time: String,
    pub description: String,
}

/// Bank details shown on the donation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BankAccount {
    pub number: &'static str,
    pub name: &'static str,
    pub purpose: &'static str,
}

pub const BANK_ACCOUNT: BankAccount = BankAccount {
    number: "96 2530 0008 2056 1056 5283 0001",
    name: "Kościoł Chrześcijański \"Dom Ojca\" we Wrocławiu",
    purpose: "Darowizna na działalność kościoła",
};

/// Church street address, identical in every language.
pub const ADDRESS_LINES: [&str; 2] = ["ul. Sołtysowicka 62A", "51-168 Wrocław"];

/// Office opening hours.
pub const OFFICE_HOURS: &str = "9:00 - 15:00";

/// Upcoming events, localized.
pub fn upcoming_events(lang: Language) -> Vec<Event> {
    let t: [(&str, &str); 3] = match lang {
        Language::Pl => [
            ("Wieczór Uwielbienia", "Czas głębokiej modlitwy i muzyki, gdzie razem szukamy oblicza Boga."),
            ("Konferencja Męska 'Odwaga'", "Całodniowe wydarzenie dla mężczyzn, którzy chcą wzrastać w wierze."),
            ("Piknik Rodzinny", "Świetna zabawa dla całych rodzin. Grill, gry i zabawy dla dzieci."),
        ],
        Language::Ua => [
            ("Вечір Поклоніння", "Час глибокої молитви та музики, де ми разом шукаємо обличчя Бога."),
            ("Чоловіча Конференція 'Відвага'", "Цілоденна подія для чоловіків, які хочуть зростати у вірі."),
            ("Сімейний Пікнік", "Чудова розвага для всієї родини. Гриль, ігри та забави для дітей."),
        ],
        Language::Be => [
            ("Вечар Пакланення", "Час глыбокай малітвы і музыкі, дзе мы разам шукаем аблічча Бога."),
            ("Мужчынская Канферэнцыя 'Адвага'", "Цэладзённая падзея для мужчын, якія хочуць ўзрастаць у веры."),
            ("Сямейны Пікнік", "Выдатная забава для ўсёй сям'і. Грыль, гульні і забавы для дзяцей."),
        ],
        Language::Ru => [
            ("Вечер Поклонения", "Время глубокой молитвы и музыки, где мы вместе ищем лица Бога."),
            ("Мужская Конференция 'Отвага'", "Событие на весь день для мужчин, желающих возрастать в вере."),
            ("Семейный Пикник", "Отличное время для всей семьи. Гриль, игры и развлечения для детей."),
        ],
        Language::En => [
            ("Worship Evening", "A time of deep prayer and music where we seek God's face together."),
            ("Men's Conference 'Courage'", "A full-day event for men who want to grow in faith."),
            ("Family Picnic", "Great fun for the whole family. Grill, games and activities for children."),
        ],
    };

    let fixed = [
        (1, "24.09.2023, 19:00", "Sala Główna", "https://picsum.photos/seed/worship/600/400"),
        (2, "14.10.2023", "Dom Ojca", "https://picsum.photos/seed/men/600/400"),
        (3, "28.05.2024, 14:00", "Park Zachodni", "https://picsum.photos/seed/picnic/600/400"),
    ];

    fixed
        .iter()
        .zip(t.iter())
        .map(|(&(id, date, location, image), &(title, description))| Event {
            id,
            title: title.to_string(),
            date: date.to_string(),
            location: location.to_string(),
            description: description.to_string(),
            image: Some(image.to_string()),
        })
        .collect()
}

/// Latest sermons, localized titles.
pub fn latest_sermons(lang: Language) -> Vec<Sermon> {
    let titles: [&str; 3] = match lang {
        Language::Pl => ["Fundamenty Wiary: Tożsamość", "Jak słyszeć głos Boga?", "Moc Przebaczenia"],
        Language::Ua => ["Фундаменти Віри: Ідентичність", "Як чути голос Бога?", "Сила Прощення"],
        Language::Be => ["Падмуркі Веры: Тоеснасць", "Як чуць голас Бога?", "Моц Прабачэння"],
        Language::Ru => ["Фундаменты Веры: Идентичность", "Как слышать голос Бога?", "Сила Прощения"],
        Language::En => ["Foundations of Faith: Identity", "How to Hear God's Voice?", "The Power of Forgiveness"],
    };

    let fixed = [
        (101, "Pastor Główny", "17.09.2023", "45 min"),
        (102, "Pastor Pomocniczy", "10.09.2023", "38 min"),
        (103, "Guest Speaker", "03.09.2023", "52 min"),
    ];

    fixed
        .iter()
        .zip(titles.iter())
        .map(|(&(id, speaker, date, duration), &title)| Sermon {
            id,
            title: title.to_string(),
            speaker: speaker.to_string(),
            date: date.to_string(),
            video_url: Some("#".to_string()),
            duration: duration.to_string(),
        })
        .collect()
}

/// Ministries, localized.
pub fn ministries(lang: Language) -> Vec<Ministry> {
    let t: [(&str, &str); 4] = match lang {
        Language::Pl => [
            ("Dla Dzieci", "Bezpieczne miejsce dla najmłodszych."),
            ("Młodzież", "Energiczne spotkania dla nastolatków."),
            ("Grupy Domowe", "Budowanie relacji w mniejszych grupach."),
            ("Służba Ubogim", "Pomoc najbardziej potrzebującym."),
        ],
        Language::Ua => [
            ("Для Дітей", "Безпечне місце для наймолодших."),
            ("Молодь", "Енергійні зустрічі для підлітків."),
            ("Домашні Групи", "Будування відносин у менших групах."),
            ("Служіння Бідним", "Допомога найбільш нужденним."),
        ],
        Language::Be => [
            ("Для Дзяцей", "Бяспечнае месца для самых маленькіх."),
            ("Моладзь", "Энергічныя сустрэчы для падлеткаў."),
            ("Дамашнія Групы", "Будаванне адносін у меншых групах."),
            ("Служэнне Бедным", "Дапамога тым, хто ў патрэбе."),
        ],
        Language::Ru => [
            ("Для Детей", "Безопасное место для самых маленьких."),
            ("Молодежь", "Энергичные встречи для подростков."),
            ("Домашние Группы", "Построение отношений в малых группах."),
            ("Служение Бедным", "Помощь самым нуждающимся."),
        ],
        Language::En => [
            ("For Children", "A safe place for the little ones."),
            ("Youth", "Energetic meetings for teenagers."),
            ("Home Groups", "Building relationships in smaller groups."),
            ("Serving the Poor", "Help for those most in need."),
        ],
    };

    let icons = [
        MinistryIcon::Heart,
        MinistryIcon::Flame,
        MinistryIcon::Users,
        MinistryIcon::HandHeart,
    ];

    icons
        .iter()
        .zip(t.iter())
        .map(|(&icon, &(title, description))| Ministry {
            title: title.to_string(),
            description: description.to_string(),
            icon,
        })
        .collect()
}

/// Weekly meetings: Sunday service at 11:00 and Wednesday prayer at 19:00.
pub fn service_times(lang: Language) -> Vec<ServiceTime> {
    let t: [(&str, &str); 2] = match lang {
        Language::Pl => [("Niedziela", "Nabożeństwo"), ("Środa", "Spotkanie modlitewne")],
        Language::Ua => [("Неділя", "Богослужіння"), ("Середа", "Молитовне зібрання")],
        Language::Be => [("Нядзеля", "Набажэнства"), ("Серада", "Малітоўны сход")],
        Language::Ru => [("Воскресенье", "Богослужение"), ("Среда", "Молитвенное собрание")],
        Language::En => [("Sunday", "Worship service"), ("Wednesday", "Prayer meeting")],
    };

    ["11:00", "19:00"]
        .iter()
        .zip(t.iter())
        .map(|(&time, &(day, description))| ServiceTime {
            day: day.to_string(),
            time: time.to_string(),
            description: description.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_match_polish_baseline() {
        let events = upcoming_events(Language::Pl).len();
        let sermons = latest_sermons(Language::Pl).len();
        let ministry_count = ministries(Language::Pl).len();
        let times = service_times(Language::Pl).len();

        for lang in Language::ALL {
            assert_eq!(upcoming_events(lang).len(), events, "events for {}", lang);
            assert_eq!(latest_sermons(lang).len(), sermons, "sermons for {}", lang);
            assert_eq!(ministries(lang).len(), ministry_count, "ministries for {}", lang);
            assert_eq!(service_times(lang).len(), times, "service times for {}", lang);
        }
    }

    #[test]
    fn test_ukrainian_parity_with_polish() {
        let pl = upcoming_events(Language::Pl);
        let ua = upcoming_events(Language::Ua);
        assert_eq!(pl.len(), ua.len());
        for (a, b) in pl.iter().zip(ua.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.date, b.date);
            assert_ne!(a.title, b.title);
        }
        assert_eq!(latest_sermons(Language::Ua).len(), latest_sermons(Language::Pl).len());
        assert_eq!(ministries(Language::Ua).len(), ministries(Language::Pl).len());
    }

    #[test]
    fn test_events_are_localized() {
        assert_eq!(upcoming_events(Language::En)[0].title, "Worship Evening");
        assert_eq!(upcoming_events(Language::Pl)[0].title, "Wieczór Uwielbienia");
    }

    #[test]
    fn test_sermon_ids_are_stable() {
        let ids: Vec<u32> = latest_sermons(Language::Ru).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![101, 102, 103]);
    }

    #[test]
    fn test_ministry_icons_are_language_independent() {
        let pl: Vec<MinistryIcon> = ministries(Language::Pl).iter().map(|m| m.icon).collect();
        let be: Vec<MinistryIcon> = ministries(Language::Be).iter().map(|m| m.icon).collect();
        assert_eq!(pl, be);
        assert_eq!(pl[3], MinistryIcon::HandHeart);
    }

    #[test]
    fn test_service_times() {
        let times = service_times(Language::En);
        assert_eq!(times[0].day, "Sunday");
        assert_eq!(times[0].time, "11:00");
        assert_eq!(times[1].time, "19:00");
    }

    #[test]
    fn test_ministry_icon_serializes_snake_case() {
        let json = serde_json::to_string(&MinistryIcon::HandHeart).unwrap();
        assert_eq!(json, "\"hand_heart\"");
    }
}
