//! Sample data every view starts from
//!
//! Mood and journal samples are dated relative to `today` so the calendar
//! always shows the past week filled in.

use chrono::{Duration, NaiveDate};

use crate::forum::{Comment, ForumPost, ForumThread, ForumTopic, TopicCategory};
use crate::journal::{Journal, JournalEntry, PromptCategory};
use crate::mood::{MoodEntry, MoodTracker};
use crate::resources::{Resource, ResourceDirectory, ResourceType};

pub fn forum_topics() -> Vec<ForumTopic> {
    vec![
        ForumTopic::new(
            1,
            "Managing Anxiety During Exams",
            "Share tips and experiences for handling test anxiety.",
            TopicCategory::Anxiety,
        )
        .posts(24)
        .last_active("2 hours ago"),
        ForumTopic::new(
            2,
            "Mindfulness Practices for Beginners",
            "Easy ways to incorporate mindfulness into daily routines.",
            TopicCategory::Mindfulness,
        )
        .posts(18)
        .last_active("5 hours ago"),
        ForumTopic::new(
            3,
            "Balancing Social Media and Mental Health",
            "Discussion on healthy boundaries with digital platforms.",
            TopicCategory::DigitalWellbeing,
        )
        .posts(31)
        .last_active("1 day ago"),
        ForumTopic::new(
            4,
            "Building Resilience Through Challenges",
            "How to grow stronger through difficult experiences.",
            TopicCategory::Resilience,
        )
        .posts(15)
        .last_active("2 days ago"),
        ForumTopic::new(
            5,
            "Sleep Hygiene Strategies",
            "Tips for improving sleep quality and establishing routines.",
            TopicCategory::SelfCare,
        )
        .posts(27)
        .last_active("3 days ago"),
        ForumTopic::new(
            6,
            "Communication Skills for Better Relationships",
            "Learning to express needs and listen effectively.",
            TopicCategory::Relationships,
        )
        .posts(22)
        .last_active("4 days ago"),
    ]
}

pub fn forum_thread() -> ForumThread {
    let post = ForumPost {
        title: "Managing Anxiety During Exams".to_string(),
        author: "Anonymous Panda".to_string(),
        posted: "1 day ago".to_string(),
        body: "With finals coming up, I'm starting to feel very anxious about my exams. \
               I'm having trouble sleeping and focusing on my studies. Does anyone have \
               tips for managing test anxiety? I'm especially looking for strategies to \
               use right before and during the exam when my mind tends to go blank."
            .to_string(),
        likes: 24,
    };

    let comments = vec![
        Comment::new(
            1,
            "Anonymous Bee",
            "AB",
            "I've been dealing with test anxiety for years. What works for me is a deep breathing technique - 4 counts in, hold for 7, exhale for 8. I do this a few times before tests and it helps calm my nervous system.",
        )
        .posted("2 hours ago")
        .with_likes(12),
        Comment::new(
            2,
            "Anonymous Fox",
            "AF",
            "I find that regular exercise during exam season helps me manage stress. Even just a 20-minute walk between study sessions makes a big difference for my anxiety levels.",
        )
        .posted("1 hour ago")
        .with_likes(8),
        Comment::new(
            3,
            "Anonymous Owl",
            "AO",
            "Something that helps me is being prepared ahead of time. Breaking study material into small chunks and reviewing over time rather than cramming reduces my anxiety significantly. Also, practice tests help me get familiar with the testing environment.",
        )
        .posted("45 minutes ago")
        .with_likes(5),
    ];

    ForumThread::new(post, comments)
}

pub fn mood_entries(today: NaiveDate) -> Vec<MoodEntry> {
    let days_ago = |n: i64| today - Duration::days(n);
    vec![
        MoodEntry::new(days_ago(6), 2, 2, 6.0, "Feeling a bit down today. Couldn't focus well on tasks."),
        MoodEntry::new(days_ago(5), 3, 3, 7.0, "Better today. Managed to complete most of my tasks."),
        MoodEntry::new(days_ago(4), 4, 4, 8.0, "Good day! Felt motivated and accomplished several tasks."),
        MoodEntry::new(days_ago(3), 3, 3, 7.0, "Decent day overall. Had a good conversation with a friend."),
        MoodEntry::new(days_ago(2), 2, 2, 5.0, "Stressful day. Had trouble sleeping last night."),
        MoodEntry::new(days_ago(1), 3, 3, 6.0, "Feeling better than yesterday. Took some time for self-care."),
    ]
}

pub fn mood_tracker(today: NaiveDate) -> MoodTracker {
    MoodTracker::with_today(mood_entries(today), today)
}

/// Sample journal entries, newest first
pub fn journal_entries(today: NaiveDate) -> Vec<JournalEntry> {
    let days_ago = |n: i64| today - Duration::days(n);
    vec![
        JournalEntry {
            id: 3,
            date: days_ago(2),
            prompt: "What's one thing you'd like to improve about yourself? What's a small step you can take?".to_string(),
            content: "I'd like to improve my ability to set boundaries. A small step I can take is to practice saying no to one non-essential commitment this week and using that time for self-care instead.".to_string(),
            category: PromptCategory::Growth,
        },
        JournalEntry {
            id: 2,
            date: days_ago(5),
            prompt: "What emotions have been most present for you today? What triggered them?".to_string(),
            content: "Anxiety has been following me all day because of my upcoming presentation. I also felt moments of joy when talking with my roommate about weekend plans. I noticed that spending time on social media triggered some feelings of inadequacy.".to_string(),
            category: PromptCategory::Reflection,
        },
        JournalEntry {
            id: 1,
            date: days_ago(7),
            prompt: "List three things you're grateful for today and why.".to_string(),
            content: "1. My supportive friends who checked in on me today.\n2. Having access to mental health resources online.\n3. The quiet morning I had to myself before classes started.".to_string(),
            category: PromptCategory::Gratitude,
        },
    ]
}

pub fn journal(today: NaiveDate) -> Journal {
    Journal::new(journal_entries(today))
}

pub fn resources() -> Vec<Resource> {
    vec![
        Resource::new(
            1,
            "Understanding Anxiety: A Guide for Students",
            "Learn about the causes, symptoms, and management strategies for anxiety in an academic setting.",
            ResourceType::Article,
        )
        .category("anxiety")
        .category("student-life")
        .with_likes(42),
        Resource::new(
            2,
            "5-Minute Mindfulness Meditation",
            "A short guided meditation perfect for beginners or when you need a quick reset during a busy day.",
            ResourceType::Video,
        )
        .category("mindfulness")
        .category("meditation")
        .category("stress-relief")
        .with_likes(78),
        Resource::new(
            3,
            "Sleep Hygiene Assessment Tool",
            "Evaluate your sleep habits and get personalized recommendations for better rest.",
            ResourceType::Tool,
        )
        .category("sleep")
        .category("self-assessment")
        .with_likes(31),
        Resource::new(
            4,
            "The Science of Happiness",
            "Explore research-backed practices that can increase your overall sense of well-being and life satisfaction.",
            ResourceType::Podcast,
        )
        .category("positive-psychology")
        .category("happiness")
        .with_likes(56),
        Resource::new(
            5,
            "Digital Detox: Reclaiming Balance in a Connected World",
            "Practical strategies for developing a healthier relationship with technology.",
            ResourceType::Article,
        )
        .category("digital-wellbeing")
        .category("habits")
        .with_likes(27),
        Resource::new(
            6,
            "Stress Management for College Students",
            "Effective techniques for managing academic pressure and maintaining mental health.",
            ResourceType::Video,
        )
        .category("stress-relief")
        .category("student-life")
        .with_likes(62),
        Resource::new(
            7,
            "Emotion Tracking Template",
            "A downloadable worksheet to help identify patterns in your emotional responses.",
            ResourceType::Tool,
        )
        .category("emotional-awareness")
        .category("self-reflection")
        .with_likes(19),
        Resource::new(
            8,
            "Building Resilience Through Adversity",
            "Stories and insights about developing inner strength during challenging times.",
            ResourceType::Podcast,
        )
        .category("resilience")
        .category("personal-growth")
        .with_likes(44),
    ]
}

pub fn resource_directory() -> ResourceDirectory {
    ResourceDirectory::new(resources())
}
