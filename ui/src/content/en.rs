//! English structured content.

use super::{
    BlogPost, ContentBlock, DetailedService, FaqItem, FaqSection, ServiceSummary, SiteContent,
    Testimonial, TrustIndicator, ValueItem,
};

pub(super) static CONTENT: SiteContent = SiteContent {
    testimonials: &[
        Testimonial {
            text: "Greg provided exceptional care for my dad during a very difficult time. His compassion, professionalism, and attention to detail gave our family real peace of mind.",
            author: "Luk R.",
            context: "Son of Client",
        },
        Testimonial {
            text: "The support was reliable, respectful, and genuinely person-centred. It made a huge difference knowing someone we trusted was there every day.",
            author: "Sarah M.",
            context: "Daughter of Client",
        },
        Testimonial {
            text: "What stood out most was the consistency and communication. We always felt informed and supported.",
            author: "James T.",
            context: "Family Member",
        },
    ],
    compliance: &[
        TrustIndicator {
            title: "DBS Checked Carers",
            description: "All carers are DBS checked and carefully vetted for suitability.",
        },
        TrustIndicator {
            title: "CQC-Aligned Standards",
            description: "Our care is delivered in line with CQC fundamental standards.",
        },
        TrustIndicator {
            title: "GDPR Compliant",
            description: "Your personal information is handled securely and confidentially.",
        },
        TrustIndicator {
            title: "Safeguarding Focused",
            description: "Clear safeguarding procedures to protect vulnerable adults.",
        },
        TrustIndicator {
            title: "Local, Director-Led Service",
            description: "Hands-on leadership ensures accountability and consistent care.",
        },
    ],
    values: &[
        ValueItem {
            title: "Dignity and Respect",
            description: "Treating every individual with the highest level of respect and preserving their self-esteem.",
            icon: "💎",
        },
        ValueItem {
            title: "Person-Centred Care",
            description: "Tailoring support to fit the unique preferences, history, and goals of each person.",
            icon: "👤",
        },
        ValueItem {
            title: "Trust and Transparency",
            description: "Open communication and honest feedback in everything we do.",
            icon: "🤝",
        },
        ValueItem {
            title: "Consistency and Continuity",
            description: "Providing familiar faces and reliable support schedules for peace of mind.",
            icon: "🔄",
        },
        ValueItem {
            title: "Compassion in Practice",
            description: "Delivering care with genuine warmth and emotional understanding.",
            icon: "❤️",
        },
    ],
    quality_safety: &[
        TrustIndicator {
            title: "DBS Checked",
            description: "Every member of our team is fully vetted and background checked.",
        },
        TrustIndicator {
            title: "Continuous Training",
            description: "Ongoing education and regular supervision for all carers.",
        },
        TrustIndicator {
            title: "Safeguarding",
            description: "Rigorous procedures in place to protect vulnerable adults at all times.",
        },
        TrustIndicator {
            title: "Data Security",
            description: "GDPR compliant handling of all sensitive personal information.",
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
        "Hourly home care",
        "Live-in care",
        "Dementia care",
        "Autism support",
        "Respite care",
        "Medication support",
        "Personal care",
        "Companionship",
        "End-of-life care",
        "Not sure / need advice",
    ],
    service_summaries: &[
        ServiceSummary {
            id: "hourly",
            title: "Hourly Home Care",
            description: "Support with daily routines, personal care, and practical tasks — helping people remain safe and independent at home.",
        },
        ServiceSummary {
            id: "live-in",
            title: "Live-in Care",
            description: "A dedicated carer living in the home to provide continuous support, reassurance, and companionship.",
        },
        ServiceSummary {
            id: "dementia",
            title: "Dementia Care",
            description: "Thoughtful, structured support for individuals living with dementia, focused on familiarity, dignity, and continuity.",
        },
        ServiceSummary {
            id: "autism",
            title: "Autism Support",
            description: "Individualised care for adults with autism, delivered with understanding, patience, and consistency.",
        },
        ServiceSummary {
            id: "respite",
            title: "Respite Care",
            description: "Short-term care that allows family carers to rest, knowing their loved one is in safe and capable hands.",
        },
        ServiceSummary {
            id: "medication",
            title: "Medication Management",
            description: "Support with medication prompts, administration, and monitoring, delivered safely and responsibly.",
        },
        ServiceSummary {
            id: "personal",
            title: "Personal Care",
            description: "Respectful assistance with washing, dressing, mobility, and personal hygiene.",
        },
        ServiceSummary {
            id: "companionship",
            title: "Companionship",
            description: "Meaningful social support to reduce loneliness and promote emotional wellbeing.",
        },
        ServiceSummary {
            id: "palliative",
            title: "End-of-Life & Palliative Care",
            description: "Compassionate care focused on comfort, dignity, and support for both individuals and their families.",
        },
    ],
    detailed_services: &[
        DetailedService {
            id: "hourly",
            icon: "🏠",
            title: "Hourly Home Care",
            description: "Flexible support with daily routines and practical tasks, helping individuals remain safe and independent at home.",
            who_it_is_for: "Adults who need support with everyday activities but want to stay in their own home.",
            how_we_provide: "Care is tailored to individual routines and preferences, delivered by consistent carers who take time to understand personal needs.",
            reassurance: "A little help can make a big difference to staying independent.",
        },
        DetailedService {
            id: "live-in",
            icon: "🛏️",
            title: "Live-in Care",
            description: "A dedicated carer living in the home to provide round-the-clock support, reassurance, and companionship.",
            who_it_is_for: "Individuals who require continuous care but wish to avoid residential settings.",
            how_we_provide: "Live-in care is carefully matched, planned, and reviewed to ensure comfort, privacy, and continuity.",
            reassurance: "Continuous care in the environment you love most.",
        },
        DetailedService {
            id: "dementia",
            icon: "🧠",
            title: "Dementia Care",
            description: "Thoughtful, structured support for individuals living with dementia, focused on familiarity and reassurance.",
            who_it_is_for: "People at any stage of dementia who benefit from routine, patience, and understanding.",
            how_we_provide: "Carers are trained to support cognitive needs while maintaining dignity, comfort, and emotional wellbeing.",
            reassurance: "Expert support focused on quality of life and familiarity.",
        },
    ],
    faq_sections: &[
        FaqSection {
            title: "Getting Started",
            items: &[
                FaqItem {
                    question: "How quickly can care start?",
                    answer: "Care can often begin shortly after an initial consultation and assessment. We always aim to respond promptly and work around individual needs.",
                },
                FaqItem {
                    question: "Is there a minimum number of care hours?",
                    answer: "We offer flexible care arrangements. The number of hours depends on individual needs and will be discussed during the consultation.",
                },
                FaqItem {
                    question: "Do you offer a free consultation?",
                    answer: "Yes. We offer a free, no-obligation consultation to understand your situation and discuss suitable care options.",
                },
            ],
        },
        FaqSection {
            title: "Types of Care",
            items: &[
                FaqItem {
                    question: "What types of care do you provide?",
                    answer: "We provide a range of services including hourly care, live-in care, dementia care, autism support, respite care, medication support, personal care, companionship, and end-of-life care.",
                },
                FaqItem {
                    question: "Can care plans change over time?",
                    answer: "Yes. Care plans are reviewed regularly and adjusted as needs change.",
                },
            ],
        },
        FaqSection {
            title: "Carers and Safety",
            items: &[
                FaqItem {
                    question: "Are your carers DBS checked?",
                    answer: "Yes. All carers are DBS checked and carefully vetted before providing care.",
                },
                FaqItem {
                    question: "Will the same carer visit each time?",
                    answer: "Wherever possible, we aim to provide continuity so clients can build trusted relationships.",
                },
                FaqItem {
                    question: "How do you ensure quality and safety?",
                    answer: "We follow safeguarding procedures, provide supervision, and deliver care aligned with CQC standards.",
                },
            ],
        },
        FaqSection {
            title: "Working with Professionals",
            items: &[FaqItem {
                question: "Do you work with NHS and other professionals?",
                answer: "Yes. We work alongside NHS teams and other professionals to support coordinated care.",
            }],
        },
        FaqSection {
            title: "Practical Information",
            items: &[FaqItem {
                question: "Which areas do you cover?",
                answer: "We provide care across Sandwell, Dudley, Tipton, West Bromwich, Stourbridge, and Wolverhampton.",
            }],
        },
    ],
    blog_categories: &[
        "Home Care Guidance",
        "Dementia Care",
        "Autism Support",
        "Respite Care",
        "Medication Management",
    ],
    blog_posts: &[
        BlogPost {
            slug: "know-when-home-care-needed",
            title: "How to Know When a Loved One Needs Home Care Support",
            excerpt: "Deciding when to start care is a journey. We explore the subtle signs that extra support might be beneficial.",
            category: "Home Care Guidance",
            read_time: "5 min",
            date: "Oct 12, 2023",
            intro: "Deciding to explore home care for a loved one is rarely a single, sudden event. More often, it’s a gradual realization that things are becoming more difficult. It's natural to feel uncertain or even guilty about this shift, but needing support isn’t a loss of independence — in many cases, it’s the very thing that helps someone stay independent for longer.",
            blocks: &[
                ContentBlock {
                    heading: "Subtle signs that support may be needed",
                    body: "Sometimes the indicators are clear, but often they are quiet changes in routine or environment. You might notice:",
                    bullets: &[
                        "Missed medications or confusion about dosages",
                        "Changes in personal hygiene or wearing the same clothes multiple days",
                        "Reduced mobility or a recent fall that has caused a loss of confidence",
                        "Weight loss or a kitchen that is lacking fresh food",
                        "Withdrawal from social activities or signs of loneliness",
                        "Unexplained bruising or minor accidents around the house",
                    ],
                },
                ContentBlock {
                    heading: "Starting the conversation",
                    body: "Talking about care works best as a series of small, honest conversations rather than one big decision. Focus on what would make daily life easier, involve your loved one in every choice, and start with a small amount of support that can grow as trust builds.",
                    bullets: &[],
                },
            ],
        },
        BlogPost {
            slug: "creating-dementia-friendly-home",
            title: "Creating a Dementia-Friendly Home",
            excerpt: "Small, practical changes to the home environment can reduce confusion and help a person with dementia feel safe and capable.",
            category: "Dementia Care",
            read_time: "6 min",
            date: "Nov 3, 2023",
            intro: "A familiar home is one of the strongest anchors for a person living with dementia. The goal of a dementia-friendly home is not to change everything, but to quietly remove sources of confusion while keeping the things that carry memory and meaning exactly where they have always been.",
            blocks: &[
                ContentBlock {
                    heading: "Light, contrast, and clutter",
                    body: "Good lighting and clear contrast do a surprising amount of work. A few changes that families tell us helped most:",
                    bullets: &[
                        "Keep hallways and stairs well lit, day and night",
                        "Use contrasting colours for doors, handrails, and toilet seats",
                        "Clear walkways of rugs and trailing cables",
                        "Label cupboards with words or pictures of what is inside",
                    ],
                },
                ContentBlock {
                    heading: "Routine is part of the environment",
                    body: "Meals at the same time, belongings in the same place, and the same familiar faces visiting — routine is as much a part of a dementia-friendly home as any physical adaptation. Consistent carers who know the person's habits can maintain that rhythm even as needs change.",
                    bullets: &[],
                },
            ],
        },
        BlogPost {
            slug: "what-is-respite-care",
            title: "What Is Respite Care, and When Should Families Use It?",
            excerpt: "Caring for a loved one is demanding. Respite care gives family carers time to rest without compromising the care their loved one receives.",
            category: "Respite Care",
            read_time: "4 min",
            date: "Dec 8, 2023",
            intro: "Family carers often keep going long past the point of exhaustion, because stepping back feels like letting someone down. Respite care exists precisely so that it doesn't have to. It is planned, short-term support that keeps your loved one safe and comfortable while you recover the energy that good care requires.",
            blocks: &[
                ContentBlock {
                    heading: "When respite makes a difference",
                    body: "There is no wrong time to ask for respite, but some moments call for it more loudly than others:",
                    bullets: &[
                        "Before exhaustion turns into illness for the carer",
                        "Around family events, travel, or work commitments",
                        "After a hospital discharge, while routines resettle",
                        "As a trial run before considering regular home care",
                    ],
                },
                ContentBlock {
                    heading: "What to expect",
                    body: "Respite begins the same way as any of our care: a conversation and an assessment. The carer follows the routines you already have in place, keeps notes, and hands back with a full picture of how things went — so stepping away never means losing touch.",
                    bullets: &[],
                },
            ],
        },
    ],
};
