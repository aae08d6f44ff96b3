//! Static translation table keyed by [`Language`].
//!
//! Each language has one [`Translations`] bundle with a section per page
//! plus the chat widget. Bundles are `'static` and never allocated.

use serde::Serialize;

use crate::types::Language;

#[derive(Debug, Clone, Serialize)]
pub struct Translations {
    pub nav: NavText,
    pub home: HomeText,
    pub about: AboutText,
    pub events: EventsText,
    pub sermons: SermonsText,
    pub contact: ContactText,
    pub donation: DonationText,
    pub footer: FooterText,
    pub chat: ChatText,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavText {
    pub home: &'static str,
    pub about: &'static str,
    pub sermons: &'static str,
    pub events: &'static str,
    pub contact: &'static str,
    pub donation: &'static str,
    pub theme_toggle: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeText {
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub join_us: &'static str,
    pub service_times_title: &'static str,
    pub ministries_title: &'static str,
    pub latest_sermons: &'static str,
    pub upcoming_events: &'static str,
    pub see_all: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutText {
    pub title: &'static str,
    pub description: &'static str,
    pub vision_title: &'static str,
    pub vision_desc: &'static str,
    pub leaders_title: &'static str,
    pub leaders_desc: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventsText {
    pub title: &'static str,
    pub sub_title: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SermonsText {
    pub main_title: &'static str,
    pub sub_title: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactText {
    pub title: &'static str,
    pub sub_title: &'static str,
    pub address: &'static str,
    pub office: &'static str,
    pub hours: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub send_button: &'static str,
    pub form_sending: &'static str,
    pub form_success: &'static str,
    pub form_invalid: &'static str,
    pub form_error: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DonationText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub verse: &'static str,
    pub bank_transfer: &'static str,
    pub account_number: &'static str,
    pub account_name: &'static str,
    pub purpose: &'static str,
    pub online_payment: &'static str,
    pub online_payment_desc: &'static str,
    pub online_payment_soon: &'static str,
    pub soon: &'static str,
    pub thank_you: &'static str,
    pub copy: &'static str,
    pub copied: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterText {
    pub tagline: &'static str,
    pub address_title: &'static str,
    pub rights: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatText {
    pub launcher: &'static str,
    pub title: &'static str,
    pub status_online: &'static str,
    pub placeholder: &'static str,
    /// Seed message of every new conversation.
    pub welcome: &'static str,
    /// Reply used when the assistant has no API key configured.
    pub fallback_no_key: &'static str,
    /// Reply used when the model returned no text.
    pub fallback_unclear: &'static str,
    /// Reply used for any other assistant failure.
    pub fallback_error: &'static str,
}

/// Translation bundle for `lang`.
pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::Pl => &PL,
        Language::Be => &BE,
        Language::Ua => &UA,
        Language::Ru => &RU,
        Language::En => &EN,
    }
}

static PL: Translations = Translations {
    nav: NavText {
        home: "Strona główna",
        about: "O nas",
        sermons: "Kazania",
        events: "Wydarzenia",
        contact: "Kontakt",
        donation: "Wesprzyj",
        theme_toggle: "Zmień motyw",
    },
    home: HomeText {
        hero_title: "Witaj w Domu Ojca",
        hero_subtitle: "Społeczność zbudowana na relacji z Bogiem Ojcem. Przyjdź taki, jaki jesteś.",
        join_us: "Dołącz do nas",
        service_times_title: "Nabożeństwa",
        ministries_title: "Nasze służby",
        latest_sermons: "Najnowsze kazania",
        upcoming_events: "Nadchodzące wydarzenia",
        see_all: "Zobacz wszystkie",
    },
    about: AboutText {
        title: "O nas",
        description: "Kościół Dom Ojca to wspólnota ludzi, którzy odkryli miłość Boga Ojca i chcą dzielić się nią z Wrocławiem.",
        vision_title: "Nasza wizja",
        vision_desc: "Chcemy być domem, w którym każdy może doświadczyć przyjęcia, uzdrowienia i nowego początku.",
        leaders_title: "Liderzy",
        leaders_desc: "Zespół pastorów i liderów służy kościołowi z oddaniem, troszcząc się o każdą osobę.",
    },
    events: EventsText {
        title: "Wydarzenia",
        sub_title: "Bądź z nami na nadchodzących spotkaniach.",
    },
    sermons: SermonsText {
        main_title: "Kazania",
        sub_title: "Słuchaj Słowa Bożego, gdziekolwiek jesteś.",
    },
    contact: ContactText {
        title: "Kontakt",
        sub_title: "Masz pytanie lub potrzebujesz modlitwy? Napisz do nas.",
        address: "Adres",
        office: "Biuro",
        hours: "Poniedziałek - Piątek",
        name_label: "Imię",
        name_placeholder: "Twoje imię",
        email_label: "E-mail",
        email_placeholder: "twoj@email.pl",
        message_label: "Wiadomość",
        message_placeholder: "W czym możemy pomóc?",
        send_button: "Wyślij wiadomość",
        form_sending: "Wysyłanie...",
        form_success: "Dziękujemy! Wiadomość została wysłana.",
        form_invalid: "Uzupełnij poprawnie wszystkie pola formularza.",
        form_error: "Nie udało się wysłać wiadomości. Spróbuj ponownie później.",
    },
    donation: DonationText {
        title: "Wesprzyj nas",
        subtitle: "Twoja hojność pozwala nam służyć miastu.",
        description: "Każdy dar wspiera działalność kościoła, służbę dzieciom, młodzieży i potrzebującym.",
        verse: "„Każdy niech da, jak postanowił w swym sercu” – 2 Kor 9:7",
        bank_transfer: "Przelew bankowy",
        account_number: "Numer konta",
        account_name: "Odbiorca",
        purpose: "Tytuł przelewu",
        online_payment: "Płatność online",
        online_payment_desc: "Wkrótce udostępnimy możliwość wsparcia kartą lub BLIKIEM.",
        online_payment_soon: "Płatności online będą dostępne wkrótce.",
        soon: "Wkrótce",
        thank_you: "Dziękujemy za Twoje wsparcie!",
        copy: "Kopiuj",
        copied: "Skopiowano",
    },
    footer: FooterText {
        tagline: "Kościół Dom Ojca we Wrocławiu",
        address_title: "Adres",
        rights: "Wszelkie prawa zastrzeżone.",
    },
    chat: ChatText {
        launcher: "Zapytaj asystenta",
        title: "Asystent Domu Ojca",
        status_online: "Online",
        placeholder: "Zadaj pytanie...",
        welcome: "Szczęść Boże! Witaj w Domu Ojca. W czym mogę Ci dzisiaj pomóc?",
        fallback_no_key: "Przepraszam, ale obecnie nie mogę połączyć się z serwerem (brak klucza API). Proszę spróbować później.",
        fallback_unclear: "Przepraszam, nie zrozumiałem pytania.",
        fallback_error: "Przepraszam, wystąpił błąd podczas przetwarzania Twojej wiadomości. Spróbuj ponownie za chwilę.",
    },
};

static BE: Translations = Translations {
    nav: NavText {
        home: "Галоўная",
        about: "Пра нас",
        sermons: "Пропаведзі",
        events: "Падзеі",
        contact: "Кантакт",
        donation: "Падтрымаць",
        theme_toggle: "Змяніць тэму",
    },
    home: HomeText {
        hero_title: "Вітаем у Доме Айца",
        hero_subtitle: "Супольнасць, пабудаваная на адносінах з Богам Айцом. Прыходзь такім, які ты ёсць.",
        join_us: "Далучайся да нас",
        service_times_title: "Набажэнствы",
        ministries_title: "Нашы служэнні",
        latest_sermons: "Апошнія пропаведзі",
        upcoming_events: "Надыходзячыя падзеі",
        see_all: "Глядзець усе",
    },
    about: AboutText {
        title: "Пра нас",
        description: "Царква Дом Айца — гэта супольнасць людзей, якія адкрылі любоў Бога Айца і хочуць дзяліцца ёй з Вроцлавам.",
        vision_title: "Наша бачанне",
        vision_desc: "Мы хочам быць домам, дзе кожны можа адчуць прыняцце, ацаленне і новы пачатак.",
        leaders_title: "Лідары",
        leaders_desc: "Каманда пастараў і лідараў з адданасцю служыць царкве, клапоцячыся пра кожнага.",
    },
    events: EventsText {
        title: "Падзеі",
        sub_title: "Будзь з намі на надыходзячых сустрэчах.",
    },
    sermons: SermonsText {
        main_title: "Пропаведзі",
        sub_title: "Слухай Слова Божае, дзе б ты ні быў.",
    },
    contact: ContactText {
        title: "Кантакт",
        sub_title: "Маеш пытанне ці патрэбна малітва? Напішы нам.",
        address: "Адрас",
        office: "Офіс",
        hours: "Панядзелак - Пятніца",
        name_label: "Імя",
        name_placeholder: "Тваё імя",
        email_label: "E-mail",
        email_placeholder: "tvoj@email.com",
        message_label: "Паведамленне",
        message_placeholder: "Чым мы можам дапамагчы?",
        send_button: "Адправіць паведамленне",
        form_sending: "Адпраўка...",
        form_success: "Дзякуй! Паведамленне адпраўлена.",
        form_invalid: "Калі ласка, правільна запоўніце ўсе палі.",
        form_error: "Не ўдалося адправіць паведамленне. Паспрабуйце пазней.",
    },
    donation: DonationText {
        title: "Падтрымай нас",
        subtitle: "Твая шчодрасць дазваляе нам служыць гораду.",
        description: "Кожны дар падтрымлівае дзейнасць царквы, служэнне дзецям, моладзі і тым, хто ў патрэбе.",
        verse: "«Кожны дай паводле расположання сэрца» – 2 Кар 9:7",
        bank_transfer: "Банкаўскі перавод",
        account_number: "Нумар рахунку",
        account_name: "Атрымальнік",
        purpose: "Прызначэнне плацяжу",
        online_payment: "Аплата анлайн",
        online_payment_desc: "Хутка з'явіцца магчымасць падтрымкі картай.",
        online_payment_soon: "Анлайн-плацяжы будуць даступныя хутка.",
        soon: "Хутка",
        thank_you: "Дзякуй за тваю падтрымку!",
        copy: "Капіяваць",
        copied: "Скапіявана",
    },
    footer: FooterText {
        tagline: "Царква Дом Айца ў Вроцлаве",
        address_title: "Адрас",
        rights: "Усе правы абаронены.",
    },
    chat: ChatText {
        launcher: "Assistant",
        title: "Асістэнт Дома Айца",
        status_online: "Online",
        placeholder: "...",
        welcome: "Слава Богу! Вітаем. Чым магу дапамагчы?",
        fallback_no_key: "Прабачце, зараз я не магу падключыцца да сервера (няма ключа API). Калі ласка, паспрабуйце пазней.",
        fallback_unclear: "Прабачце, я не зразумеў пытання.",
        fallback_error: "Прабачце, пры апрацоўцы вашага паведамлення адбылася памылка. Паспрабуйце крыху пазней.",
    },
};

static UA: Translations = Translations {
    nav: NavText {
        home: "Головна",
        about: "Про нас",
        sermons: "Проповіді",
        events: "Події",
        contact: "Контакт",
        donation: "Підтримати",
        theme_toggle: "Змінити тему",
    },
    home: HomeText {
        hero_title: "Ласкаво просимо до Дому Отця",
        hero_subtitle: "Спільнота, збудована на стосунках з Богом Отцем. Приходь таким, яким ти є.",
        join_us: "Приєднуйся до нас",
        service_times_title: "Богослужіння",
        ministries_title: "Наші служіння",
        latest_sermons: "Останні проповіді",
        upcoming_events: "Найближчі події",
        see_all: "Дивитися всі",
    },
    about: AboutText {
        title: "Про нас",
        description: "Церква Дім Отця — це спільнота людей, які відкрили любов Бога Отця і хочуть ділитися нею з Вроцлавом.",
        vision_title: "Наше бачення",
        vision_desc: "Ми хочемо бути домом, де кожен може відчути прийняття, зцілення і новий початок.",
        leaders_title: "Лідери",
        leaders_desc: "Команда пасторів і лідерів віддано служить церкві, піклуючись про кожну людину.",
    },
    events: EventsText {
        title: "Події",
        sub_title: "Будь з нами на найближчих зустрічах.",
    },
    sermons: SermonsText {
        main_title: "Проповіді",
        sub_title: "Слухай Слово Боже, де б ти не був.",
    },
    contact: ContactText {
        title: "Контакт",
        sub_title: "Маєш питання чи потребуєш молитви? Напиши нам.",
        address: "Адреса",
        office: "Офіс",
        hours: "Понеділок - П'ятниця",
        name_label: "Ім'я",
        name_placeholder: "Твоє ім'я",
        email_label: "E-mail",
        email_placeholder: "tviy@email.com",
        message_label: "Повідомлення",
        message_placeholder: "Чим ми можемо допомогти?",
        send_button: "Надіслати повідомлення",
        form_sending: "Надсилання...",
        form_success: "Дякуємо! Повідомлення надіслано.",
        form_invalid: "Будь ласка, правильно заповніть усі поля.",
        form_error: "Не вдалося надіслати повідомлення. Спробуйте пізніше.",
    },
    donation: DonationText {
        title: "Підтримай нас",
        subtitle: "Твоя щедрість дозволяє нам служити місту.",
        description: "Кожен дар підтримує діяльність церкви, служіння дітям, молоді та нужденним.",
        verse: "«Кожен хай дає, як серце йому призначає» – 2 Кор 9:7",
        bank_transfer: "Банківський переказ",
        account_number: "Номер рахунку",
        account_name: "Одержувач",
        purpose: "Призначення платежу",
        online_payment: "Оплата онлайн",
        online_payment_desc: "Незабаром з'явиться можливість підтримки карткою.",
        online_payment_soon: "Онлайн-платежі будуть доступні незабаром.",
        soon: "Незабаром",
        thank_you: "Дякуємо за твою підтримку!",
        copy: "Копіювати",
        copied: "Скопійовано",
    },
    footer: FooterText {
        tagline: "Церква Дім Отця у Вроцлаві",
        address_title: "Адреса",
        rights: "Усі права захищені.",
    },
    chat: ChatText {
        launcher: "Assistant",
        title: "Асистент Дому Отця",
        status_online: "Online",
        placeholder: "...",
        welcome: "Слава Богу! Ласкаво просимо. Чим можу допомогти?",
        fallback_no_key: "Вибачте, зараз я не можу під'єднатися до сервера (немає ключа API). Будь ласка, спробуйте пізніше.",
        fallback_unclear: "Вибачте, я не зрозумів питання.",
        fallback_error: "Вибачте, під час обробки вашого повідомлення сталася помилка. Спробуйте трохи пізніше.",
    },
};

static RU: Translations = Translations {
    nav: NavText {
        home: "Главная",
        about: "О нас",
        sermons: "Проповеди",
        events: "События",
        contact: "Контакт",
        donation: "Поддержать",
        theme_toggle: "Сменить тему",
    },
    home: HomeText {
        hero_title: "Добро пожаловать в Дом Отца",
        hero_subtitle: "Сообщество, построенное на отношениях с Богом Отцом. Приходи таким, какой ты есть.",
        join_us: "Присоединяйся к нам",
        service_times_title: "Богослужения",
        ministries_title: "Наши служения",
        latest_sermons: "Последние проповеди",
        upcoming_events: "Ближайшие события",
        see_all: "Смотреть все",
    },
    about: AboutText {
        title: "О нас",
        description: "Церковь Дом Отца — это сообщество людей, которые открыли любовь Бога Отца и хотят делиться ею с Вроцлавом.",
        vision_title: "Наше видение",
        vision_desc: "Мы хотим быть домом, где каждый может испытать принятие, исцеление и новое начало.",
        leaders_title: "Лидеры",
        leaders_desc: "Команда пасторов и лидеров преданно служит церкви, заботясь о каждом человеке.",
    },
    events: EventsText {
        title: "События",
        sub_title: "Будь с нами на ближайших встречах.",
    },
    sermons: SermonsText {
        main_title: "Проповеди",
        sub_title: "Слушай Слово Божье, где бы ты ни был.",
    },
    contact: ContactText {
        title: "Контакт",
        sub_title: "Есть вопрос или нужна молитва? Напиши нам.",
        address: "Адрес",
        office: "Офис",
        hours: "Понедельник - Пятница",
        name_label: "Имя",
        name_placeholder: "Твоё имя",
        email_label: "E-mail",
        email_placeholder: "tvoy@email.com",
        message_label: "Сообщение",
        message_placeholder: "Чем мы можем помочь?",
        send_button: "Отправить сообщение",
        form_sending: "Отправка...",
        form_success: "Спасибо! Сообщение отправлено.",
        form_invalid: "Пожалуйста, правильно заполните все поля.",
        form_error: "Не удалось отправить сообщение. Попробуйте позже.",
    },
    donation: DonationText {
        title: "Поддержи нас",
        subtitle: "Твоя щедрость позволяет нам служить городу.",
        description: "Каждый дар поддерживает деятельность церкви, служение детям, молодёжи и нуждающимся.",
        verse: "«Каждый уделяй по расположению сердца» – 2 Кор 9:7",
        bank_transfer: "Банковский перевод",
        account_number: "Номер счёта",
        account_name: "Получатель",
        purpose: "Назначение платежа",
        online_payment: "Оплата онлайн",
        online_payment_desc: "Скоро появится возможность поддержки картой.",
        online_payment_soon: "Онлайн-платежи будут доступны скоро.",
        soon: "Скоро",
        thank_you: "Спасибо за твою поддержку!",
        copy: "Копировать",
        copied: "Скопировано",
    },
    footer: FooterText {
        tagline: "Церковь Дом Отца во Вроцлаве",
        address_title: "Адрес",
        rights: "Все права защищены.",
    },
    chat: ChatText {
        launcher: "Assistant",
        title: "Ассистент Дома Отца",
        status_online: "Online",
        placeholder: "...",
        welcome: "Слава Богу! Добро пожаловать. Чем могу помочь?",
        fallback_no_key: "Извините, сейчас я не могу подключиться к серверу (нет ключа API). Пожалуйста, попробуйте позже.",
        fallback_unclear: "Извините, я не понял вопроса.",
        fallback_error: "Извините, при обработке вашего сообщения произошла ошибка. Попробуйте чуть позже.",
    },
};

static EN: Translations = Translations {
    nav: NavText {
        home: "Home",
        about: "About",
        sermons: "Sermons",
        events: "Events",
        contact: "Contact",
        donation: "Give",
        theme_toggle: "Toggle theme",
    },
    home: HomeText {
        hero_title: "Welcome to Father's House",
        hero_subtitle: "A community built on a relationship with God the Father. Come as you are.",
        join_us: "Join us",
        service_times_title: "Services",
        ministries_title: "Our ministries",
        latest_sermons: "Latest sermons",
        upcoming_events: "Upcoming events",
        see_all: "See all",
    },
    about: AboutText {
        title: "About us",
        description: "Father's House Church is a community of people who have discovered the love of God the Father and want to share it with Wrocław.",
        vision_title: "Our vision",
        vision_desc: "We want to be a home where everyone can experience acceptance, healing and a new beginning.",
        leaders_title: "Leaders",
        leaders_desc: "A team of pastors and leaders serves the church with devotion, caring for every person.",
    },
    events: EventsText {
        title: "Events",
        sub_title: "Join us at our upcoming gatherings.",
    },
    sermons: SermonsText {
        main_title: "Sermons",
        sub_title: "Listen to the Word of God wherever you are.",
    },
    contact: ContactText {
        title: "Contact",
        sub_title: "Have a question or need prayer? Write to us.",
        address: "Address",
        office: "Office",
        hours: "Monday - Friday",
        name_label: "Name",
        name_placeholder: "Your name",
        email_label: "Email",
        email_placeholder: "you@email.com",
        message_label: "Message",
        message_placeholder: "How can we help?",
        send_button: "Send message",
        form_sending: "Sending...",
        form_success: "Thank you! Your message has been sent.",
        form_invalid: "Please fill in all fields correctly.",
        form_error: "We could not send your message. Please try again later.",
    },
    donation: DonationText {
        title: "Support us",
        subtitle: "Your generosity lets us serve the city.",
        description: "Every gift supports the life of the church and our ministry to children, youth and those in need.",
        verse: "\"Each of you should give what you have decided in your heart to give\" – 2 Cor 9:7",
        bank_transfer: "Bank transfer",
        account_number: "Account number",
        account_name: "Recipient",
        purpose: "Transfer title",
        online_payment: "Online payment",
        online_payment_desc: "Card payments will be available soon.",
        online_payment_soon: "Online payments are coming soon.",
        soon: "Soon",
        thank_you: "Thank you for your support!",
        copy: "Copy",
        copied: "Copied",
    },
    footer: FooterText {
        tagline: "Father's House Church in Wrocław",
        address_title: "Address",
        rights: "All rights reserved.",
    },
    chat: ChatText {
        launcher: "Ask Assistant",
        title: "Father's House Assistant",
        status_online: "Online",
        placeholder: "Ask a question...",
        welcome: "God bless! Welcome to Father's House. How can I help you today?",
        fallback_no_key: "Sorry, I cannot connect to the server right now (missing API key). Please try again later.",
        fallback_unclear: "Sorry, I did not understand the question.",
        fallback_error: "Sorry, something went wrong while processing your message. Please try again in a moment.",
    },
};
