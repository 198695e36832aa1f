//! Polish structured content.

use super::{
    BlogPost, ContentBlock, DetailedService, FaqItem, FaqSection, ServiceSummary, SiteContent,
    Testimonial, TrustIndicator, ValueItem,
};

pub(super) static CONTENT: SiteContent = SiteContent {
    testimonials: &[
        Testimonial {
            text: "Opieka była pełna empatii i spokoju. Czuliśmy, że nasz bliski jest w dobrych rękach.",
            author: "Córka podopiecznego",
            context: "",
        },
        Testimonial {
            text: "Najważniejsze było zaufanie i ciągłość. To naprawdę robi różnicę.",
            author: "Syn podopiecznego",
            context: "",
        },
        Testimonial {
            text: "Dobra komunikacja i poczucie bezpieczeństwa od pierwszego kontaktu.",
            author: "Członek rodziny",
            context: "",
        },
    ],
    compliance: &[
        TrustIndicator {
            title: "Opiekunowie z DBS",
            description: "Wszyscy nasi opiekunowie posiadają aktualne zaświadczenie o niekaralności (DBS).",
        },
        TrustIndicator {
            title: "Standardy CQC",
            description: "Nasze wsparcie jest realizowane zgodnie z wymogami jakości brytyjskiego CQC.",
        },
        TrustIndicator {
            title: "Poufność i bezpieczeństwo",
            description: "Państwa dane są przetwarzane w sposób bezpieczny, z zachowaniem pełnej prywatności.",
        },
        TrustIndicator {
            title: "Bezpieczeństwo podopiecznych",
            description: "Stosujemy ścisłe procedury ochrony osób wymagających wsparcia.",
        },
        TrustIndicator {
            title: "Usługa lokalna",
            description: "Jesteśmy lokalnym zespołem, zarządzanym bezpośrednio przez dyrektora.",
        },
    ],
    values: &[
        ValueItem {
            title: "Opieka skoncentrowana na osobie",
            description: "Nie skupiamy się na procedurach, lecz na konkretnym człowieku i jego historii.",
            icon: "👤",
        },
        ValueItem {
            title: "Stałość opiekunów",
            description: "Budowanie trwałych relacji i zaufania dzięki ciągłości personelu.",
            icon: "🤝",
        },
        ValueItem {
            title: "Bezpośrednie zaangażowanie",
            description: "Osoba zarządzająca bierze pełną odpowiedzialność za jakość świadczonej opieki.",
            icon: "📍",
        },
        ValueItem {
            title: "Jasna komunikacja",
            description: "Pozostajemy w stałym kontakcie z rodziną podopiecznego.",
            icon: "🔄",
        },
        ValueItem {
            title: "Zgodność ze standardami",
            description: "Praca w pełnym porozumieniu z wymogami CQC.",
            icon: "✅",
        },
    ],
    quality_safety: &[
        TrustIndicator {
            title: "Skoncentrowani na osobie",
            description: "Opieka dostosowana do stylu życia, a nie odwrotnie.",
        },
        TrustIndicator {
            title: "Wiarygodność",
            description: "Opiekunowie z pełną weryfikacją DBS i szkoleniami.",
        },
        TrustIndicator {
            title: "Przejrzystość",
            description: "Uczciwa informacja i stały kontakt z biurem.",
        },
        TrustIndicator {
            title: "Lokalność",
            description: "Jesteśmy tu na miejscu, w sercu Sandwell i Dudley.",
        },
    ],
    areas: &[
        "Sandwell",
        "Dudley",
        "Tipton",
        "West Bromwich",
        "Stourbridge",
        "Wolverhampton",
    ],
    care_options: &[
        "Opieka godzinowa",
        "Opieka całodobowa (live-in)",
        "Opieka nad osobą z demencją",
        "Wsparcie dla osoby w spektrum autyzmu",
        "Opieka wytchnieniowa",
        "Wsparcie przy lekach",
        "Opieka osobista",
        "Towarzystwo",
        "Opieka paliatywna / u kresu życia",
        "Nie jestem pewien / proszę o poradę",
    ],
    service_summaries: &[
        ServiceSummary {
            id: "hourly",
            title: "Opieka godzinowa",
            description: "Wsparcie w codziennych czynnościach, higienie, posiłkach i organizacji dnia.",
        },
        ServiceSummary {
            id: "live-in",
            title: "Opieka całodobowa (live-in)",
            description: "Stała obecność opiekuna w domu, zapewniająca bezpieczeństwo i spokój.",
        },
        ServiceSummary {
            id: "dementia",
            title: "Opieka nad osobami z demencją",
            description: "Cierpliwa, uporządkowana opieka oparta na rutynie i poczuciu bezpieczeństwa.",
        },
        ServiceSummary {
            id: "autism",
            title: "Wsparcie dla osób w spektrum autyzmu",
            description: "Indywidualne podejście, przewidywalność i szacunek dla potrzeb sensorycznych.",
        },
        ServiceSummary {
            id: "respite",
            title: "Opieka wytchnieniowa",
            description: "Czasowe wsparcie, które pozwala rodzinom odpocząć i zadbać o siebie.",
        },
        ServiceSummary {
            id: "medication",
            title: "Wsparcie przy lekach",
            description: "Pomoc w przyjmowaniu leków zgodnie z zaleceniami lekarza.",
        },
        ServiceSummary {
            id: "personal",
            title: "Opieka osobista",
            description: "Dyskretna i pełna szacunku pomoc w codziennej higienie i mobilności.",
        },
        ServiceSummary {
            id: "companionship",
            title: "Towarzystwo",
            description: "Obecność, rozmowa i wsparcie emocjonalne dla osób czujących się samotnie.",
        },
        ServiceSummary {
            id: "palliative",
            title: "Opieka paliatywna i u kresu życia",
            description: "Spokojna, empatyczna opieka nastawiona na komfort i godność.",
        },
    ],
    detailed_services: &[
        DetailedService {
            id: "hourly",
            icon: "🏠",
            title: "Opieka godzinowa",
            description: "Wsparcie w codziennych czynnościach, higienie, posiłkach i organizacji dnia.",
            who_it_is_for: "Osoby potrzebujące wsparcia przez kilka godzin w ciągu dnia.",
            how_we_provide: "Nasi opiekunowie przychodzą o stałych porach, pomagając w utrzymaniu rutyny i bezpieczeństwa.",
            reassurance: "Niewielka pomoc może zdziałać wiele dla samodzielności.",
        },
        DetailedService {
            id: "live-in",
            icon: "🛏️",
            title: "Opieka całodobowa (live-in)",
            description: "Stała obecność opiekuna w domu, zapewniająca bezpieczeństwo i spokój.",
            who_it_is_for: "Osoby wymagające stałego wsparcia, które chcą pozostać we własnym domu.",
            how_we_provide: "Opiekun zamieszkuje u podopiecznego, stając się wsparciem w każdej chwili dnia i nocy.",
            reassurance: "Bezpieczeństwo bez konieczności opuszczania ulubionego otoczenia.",
        },
        DetailedService {
            id: "dementia",
            icon: "🧠",
            title: "Opieka nad osobami z demencją",
            description: "Cierpliwa, uporządkowana opieka oparta na rutynie i poczuciu bezpieczeństwa.",
            who_it_is_for: "Osoby żyjące z demencją lub chorobą Alzheimera.",
            how_we_provide: "Skupiamy się na minimalizowaniu stresu i budowaniu zaufania poprzez znajome twarze i spokojny rytm dnia.",
            reassurance: "Cierpliwość i zrozumienie to fundamenty naszej opieki.",
        },
    ],
    faq_sections: &[
        FaqSection {
            title: "Pierwsze kroki",
            items: &[
                FaqItem {
                    question: "Jak szybko może rozpocząć się opieka?",
                    answer: "Po rozmowie i wstępnej ocenie potrzeb staramy się rozpocząć opiekę tak szybko, jak to możliwe.",
                },
                FaqItem {
                    question: "Czy obowiązuje minimalna liczba godzin opieki?",
                    answer: "Oferujemy elastyczne formy opieki. Liczba godzin zależy od indywidualnych potrzeb i jest ustalana podczas konsultacji.",
                },
                FaqItem {
                    question: "Czy oferujecie bezpłatną konsultację?",
                    answer: "Tak. Oferujemy bezpłatną konsultację bez zobowiązań, aby poznać Państwa sytuację i omówić możliwe formy opieki.",
                },
            ],
        },
        FaqSection {
            title: "Rodzaje opieki",
            items: &[
                FaqItem {
                    question: "Jakie rodzaje opieki oferujecie?",
                    answer: "Oferujemy m.in. opiekę godzinową, opiekę całodobową, opiekę nad osobami z demencją, wsparcie dla osób w spektrum autyzmu, opiekę wytchnieniową, wsparcie przy lekach, opiekę osobistą, towarzystwo oraz opiekę paliatywną.",
                },
                FaqItem {
                    question: "Czy plan opieki może się zmieniać?",
                    answer: "Tak. Plany opieki są regularnie omawiane i dostosowywane do zmieniających się potrzeb.",
                },
            ],
        },
        FaqSection {
            title: "Opiekunowie i bezpieczeństwo",
            items: &[
                FaqItem {
                    question: "Czy opiekunowie posiadają aktualne sprawdzenie DBS?",
                    answer: "Tak. Wszyscy opiekunowie posiadają aktualne sprawdzenie DBS i są starannie weryfikowani przed rozpoczęciem pracy.",
                },
                FaqItem {
                    question: "Czy ten sam opiekun będzie przychodził regularnie?",
                    answer: "Tam, gdzie to możliwe, zapewniamy ciągłość opieki, aby możliwe było zbudowanie relacji opartej na zaufaniu.",
                },
                FaqItem {
                    question: "Jak zapewniacie jakość i bezpieczeństwo?",
                    answer: "Pracujemy zgodnie z procedurami ochrony dorosłych, zapewniamy nadzór oraz realizujemy opiekę zgodnie ze standardami CQC.",
                },
            ],
        },
        FaqSection {
            title: "Współpraca z rodziną i NHS",
            items: &[FaqItem {
                question: "Czy współpracujecie z NHS oraz innymi specjalistami?",
                answer: "Tak. Współpracujemy z zespołami NHS oraz innymi specjalistami, aby zapewnić skoordynowaną i bezpieczną opiekę.",
            }],
        },
        FaqSection {
            title: "Informacje praktyczne",
            items: &[FaqItem {
                question: "Jakie obszary obsługujecie?",
                answer: "Świadczymy opiekę domową na terenie Sandwell, Dudley, Tipton, West Bromwich, Stourbridge oraz Wolverhampton.",
            }],
        },
    ],
    blog_categories: &[
        "Wskazówki dla rodzin",
        "Opieka w demencji",
        "Autyzm",
        "Opieka wytchnieniowa",
        "Zarządzanie lekami",
    ],
    blog_posts: &[
        BlogPost {
            slug: "kiedy-zaczac-opieke",
            title: "Kiedy bliska osoba potrzebuje wsparcia w domu?",
            excerpt: "Decyzja o opiece to proces. Sprawdzamy, jakie sygnały mogą świadczyć o tym, że warto pomyśleć o dodatkowej pomocy.",
            category: "Wskazówki dla rodzin",
            read_time: "5 min",
            date: "12 paź 2023",
            intro: "Rozważenie opieki domowej dla bliskiej osoby to często trudny moment pełen pytań. Ważne jest, aby wiedzieć, że wsparcie nie oznacza utraty niezależności, a wręcz może pomóc ją zachować na dłużej.",
            blocks: &[
                ContentBlock {
                    heading: "Subtelne znaki",
                    body: "Mogą Państwo zauważyć trudności z codziennymi czynnościami, zapominanie o lekach czy mniejszą dbałość o posiłki.",
                    bullets: &[
                        "Problemy z utrzymaniem czystości w domu",
                        "Zmiany w sposobie poruszania się",
                        "Samotność i wycofanie z kontaktów",
                    ],
                },
                ContentBlock {
                    heading: "Jak rozpocząć rozmowę",
                    body: "Rozmowa o opiece najlepiej sprawdza się jako seria spokojnych, szczerych rozmów, a nie jedna wielka decyzja. Warto zacząć od niewielkiego wsparcia, które z czasem może rosnąć wraz z zaufaniem.",
                    bullets: &[],
                },
            ],
        },
        BlogPost {
            slug: "dom-przyjazny-demencji",
            title: "Jak urządzić dom przyjazny osobie z demencją",
            excerpt: "Drobne, praktyczne zmiany w otoczeniu mogą zmniejszyć dezorientację i pomóc osobie z demencją czuć się bezpiecznie.",
            category: "Opieka w demencji",
            read_time: "6 min",
            date: "3 lis 2023",
            intro: "Znajomy dom to jedna z najsilniejszych kotwic dla osoby żyjącej z demencją. Celem nie jest zmiana wszystkiego, lecz ciche usunięcie źródeł dezorientacji przy zachowaniu rzeczy, które niosą pamięć i znaczenie.",
            blocks: &[
                ContentBlock {
                    heading: "Światło, kontrast i porządek",
                    body: "Dobre oświetlenie i wyraźny kontrast robią zaskakująco dużo. Kilka zmian, które według rodzin pomogły najbardziej:",
                    bullets: &[
                        "Dobrze oświetlone korytarze i schody, w dzień i w nocy",
                        "Kontrastowe kolory drzwi, poręczy i desek sedesowych",
                        "Przejścia wolne od dywaników i luźnych kabli",
                        "Szafki opisane słowami lub obrazkami zawartości",
                    ],
                },
                ContentBlock {
                    heading: "Rutyna jest częścią otoczenia",
                    body: "Posiłki o stałych porach, rzeczy na swoich miejscach i te same znajome twarze — rutyna jest równie ważna jak fizyczne dostosowania. Stali opiekunowie, którzy znają przyzwyczajenia podopiecznego, potrafią utrzymać ten rytm nawet wtedy, gdy potrzeby się zmieniają.",
                    bullets: &[],
                },
            ],
        },
        BlogPost {
            slug: "czym-jest-opieka-wytchnieniowa",
            title: "Czym jest opieka wytchnieniowa i kiedy z niej skorzystać?",
            excerpt: "Opieka nad bliską osobą bywa wyczerpująca. Opieka wytchnieniowa daje rodzinie czas na odpoczynek bez obniżania jakości wsparcia.",
            category: "Opieka wytchnieniowa",
            read_time: "4 min",
            date: "8 gru 2023",
            intro: "Opiekunowie rodzinni często działają długo po granicy wyczerpania, bo odpoczynek wydaje się zawiedzeniem bliskiej osoby. Opieka wytchnieniowa istnieje właśnie po to, aby tak nie było. To zaplanowane, krótkoterminowe wsparcie, które zapewnia podopiecznemu bezpieczeństwo, a rodzinie czas na regenerację.",
            blocks: &[
                ContentBlock {
                    heading: "Kiedy opieka wytchnieniowa ma sens",
                    body: "Nie ma złego momentu, aby poprosić o wytchnienie, ale niektóre sytuacje wołają o nie głośniej:",
                    bullets: &[
                        "Zanim zmęczenie opiekuna przerodzi się w chorobę",
                        "Przy wydarzeniach rodzinnych, wyjazdach lub obowiązkach zawodowych",
                        "Po wypisie ze szpitala, gdy rutyna wraca na swoje tory",
                        "Jako próba przed podjęciem regularnej opieki domowej",
                    ],
                },
                ContentBlock {
                    heading: "Czego się spodziewać",
                    body: "Opieka wytchnieniowa zaczyna się tak samo jak każda nasza usługa: od rozmowy i oceny potrzeb. Opiekun podąża za ustalonym rytmem dnia, prowadzi notatki i przekazuje pełny obraz tego, jak minął czas — odpoczynek nigdy nie oznacza utraty kontaktu.",
                    bullets: &[],
                },
            ],
        },
    ],
};
