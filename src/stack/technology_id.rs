crate::define_id_enum! {
    /// Technology identifier with support for catalog-file technologies
    TechnologyId {
        React18 => "react-18" : "React 18" | "React" | "reactjs",
        NextJs14 => "nextjs-14" : "Next.js 14" | "Next.js" | "nextjs" | "next",
        Vue3 => "vue-3" : "Vue 3" | "Vue" | "vuejs",
        Angular => "angular" : "Angular",
        Svelte => "svelte" : "Svelte",
        TailwindCss => "tailwind-css" : "Tailwind CSS" | "tailwind" | "tailwindcss",
        Vite => "vite" : "Vite",
        TanStackQuery => "tanstack-query" : "TanStack Query" | "React Query",
        TypeScript => "typescript" : "TypeScript" | "ts",
        Zod => "zod" : "Zod",
        GraphQl => "graphql" : "GraphQL",
        Jest => "jest" : "Jest",
        NodeJs => "nodejs" : "Node.js" | "node",
        Express => "express" : "Express" | "Express.js" | "expressjs",
        NestJs => "nestjs" : "NestJS" | "nest",
        FastApi => "fastapi" : "FastAPI",
        Django => "django" : "Django",
        Prisma => "prisma" : "Prisma",
        PostgreSql => "postgresql" : "PostgreSQL" | "postgres",
        MongoDb => "mongodb" : "MongoDB" | "mongo",
        Redis => "redis" : "Redis",
        Docker => "docker" : "Docker",
    }
}
