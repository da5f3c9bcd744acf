// Static page copy.

pub const INSTRUCTIONS: &str =
    "Use Arrow Keys or Drag to rotate pokeballs. Click the front pokeball to navigate to their page.";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Hi! I'm Hyun, a double major in Computer Science and Neuroscience at the University of \
     Maryland. I'm passionate about exploring the intersection of technology and the human body, \
     building innovative projects, and solving complex problems.",
    "Beyond academics, I enjoy staying active with sports like soccer and volleyball, which keep \
     me energized and grounded. I'm also a big fan of puzzles, escape rooms, and problem-solving \
     challenges that push me to think creatively.",
    "In my free time, I love reading for hours on end, diving into new stories, ideas, and \
     perspectives. Gaming is another hobby of mine, especially games by Riot, where I admire the \
     creativity and systems thinking behind their designs.",
    "This website showcases my projects, research, and interests. Click the buttons below to \
     explore my work or get in touch. I'd love to connect!",
];

pub struct ContactMethod {
    pub kind: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        kind: "Email",
        value: "hyun@gmail.com",
        icon: "📧",
    },
    ContactMethod {
        kind: "LinkedIn",
        value: "www.linkedin.com/in/hyun-jang",
        icon: "💼",
    },
    ContactMethod {
        kind: "GitHub",
        value: "github.com/hjang40",
        icon: "💻",
    },
    ContactMethod {
        kind: "Phone",
        value: "(301) 377 - 2321",
        icon: "📱",
    },
];

pub const CONTACT_BLURB: &str = "I'm always excited to connect with fellow developers, \
    researchers, and anyone interested in the intersection of technology and neuroscience. \
    Whether you want to collaborate on a project, discuss ideas, or just say hello, feel free \
    to reach out!";
