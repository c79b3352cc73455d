//! Built-in technology catalog
//!
//! Edges are authored one direction at a time. Where both directions exist they were
//! written independently and may carry different scores.

use super::technology::{CompatibilityEdge as Edge, Technology, Zone};
use super::TechnologyId as Id;

pub(crate) fn technologies() -> Vec<Technology> {
    let mut all = frontend();
    all.extend(agnostic());
    all.extend(backend());
    all
}

fn frontend() -> Vec<Technology> {
    vec![
        Technology::new(Id::React18, Zone::Frontend)
            .with_package("react")
            .with_description("Component-based UI library with concurrent rendering")
            .with_edge(
                Edge::new(
                    Id::TypeScript,
                    95,
                    "First-class type definitions for components and hooks",
                )
                .with_benefits(&["Typed props", "Better IDE support"]),
            )
            .with_edge(Edge::new(Id::NextJs14, 98, "Next.js is built on React"))
            .with_edge(
                Edge::new(Id::TailwindCss, 92, "Utility classes map cleanly onto JSX")
                    .with_benefits(&["No CSS files to maintain"]),
            )
            .with_edge(Edge::new(Id::Vite, 94, "Fast dev server with React fast refresh"))
            .with_edge(Edge::new(Id::TanStackQuery, 95, "Server-state caching built for React"))
            .with_edge(Edge::new(Id::Express, 85, "Common SPA + REST API pairing"))
            .with_edge(Edge::new(Id::GraphQl, 88, "Works well with Apollo or urql clients"))
            .with_edge(Edge::new(Id::Jest, 90, "Standard choice with React Testing Library"))
            .with_edge(
                Edge::new(Id::Vue3, 20, "Competing UI libraries")
                    .with_conflicts(&["Two rendering runtimes", "Duplicated component model"]),
            ),
        Technology::new(Id::NextJs14, Zone::Frontend)
            .fullstack()
            .with_package("next")
            .with_description("React framework with server components and API routes")
            .with_edge(Edge::new(Id::React18, 98, "Ships with React as its view layer"))
            .with_edge(
                Edge::new(Id::TypeScript, 96, "Zero-config TypeScript support")
                    .with_benefits(&["Typed route handlers"]),
            )
            .with_edge(Edge::new(Id::TailwindCss, 95, "Offered by create-next-app"))
            .with_edge(
                Edge::new(Id::Prisma, 93, "Popular data layer for route handlers")
                    .with_benefits(&["Type-safe queries in server components"]),
            )
            .with_edge(Edge::new(Id::PostgreSql, 88, "Through an ORM or a query builder"))
            .with_edge(
                Edge::new(Id::Express, 70, "Possible, but API routes cover most needs")
                    .with_conflicts(&["Overlapping routing layers"]),
            )
            .with_edge(Edge::new(Id::Docker, 85, "Standalone output mode fits containers"))
            .with_edge(
                Edge::new(Id::Vite, 30, "Next.js brings its own bundler")
                    .with_conflicts(&["Competing build pipelines"]),
            ),
        Technology::new(Id::Vue3, Zone::Frontend)
            .with_package("vue")
            .with_description("Progressive framework with the Composition API")
            .with_edge(Edge::new(Id::TypeScript, 90, "Composition API is written in TypeScript"))
            .with_edge(Edge::new(Id::Vite, 98, "Vite came out of the Vue ecosystem"))
            .with_edge(Edge::new(Id::TailwindCss, 90, "Works in single-file components"))
            .with_edge(Edge::new(Id::Express, 82, "Common SPA + REST API pairing"))
            .with_edge(
                Edge::new(Id::React18, 20, "Competing UI libraries")
                    .with_conflicts(&["Two rendering runtimes"]),
            ),
        Technology::new(Id::Angular, Zone::Frontend)
            .with_package("@angular/core")
            .with_description("Batteries-included framework with dependency injection")
            .with_edge(
                Edge::new(Id::TypeScript, 99, "Angular requires TypeScript")
                    .with_benefits(&["Decorators", "Strict templates"]),
            )
            .with_edge(Edge::new(Id::NestJs, 92, "NestJS borrows Angular's module system"))
            .with_edge(Edge::new(Id::TailwindCss, 80, "Supported through the Angular CLI")),
        Technology::new(Id::Svelte, Zone::Frontend)
            .with_dev_package("svelte")
            .with_description("Compiler that turns components into plain JavaScript")
            .with_edge(Edge::new(Id::Vite, 96, "Official tooling is Vite-based"))
            .with_edge(Edge::new(Id::TypeScript, 88, "Supported via svelte-preprocess"))
            .with_edge(Edge::new(Id::TailwindCss, 88, "Utility classes in markup")),
        Technology::new(Id::TailwindCss, Zone::Frontend)
            .with_dev_package("tailwindcss")
            .with_description("Utility-first CSS framework")
            .with_edge(Edge::new(Id::React18, 92, "Class names compose inside JSX"))
            .with_edge(Edge::new(Id::Vite, 90, "PostCSS plugin runs in the Vite pipeline")),
        Technology::new(Id::Vite, Zone::Frontend)
            .with_dev_package("vite")
            .with_description("Native-ESM dev server and Rollup-based bundler")
            .with_edge(Edge::new(Id::TypeScript, 94, "Transpiles TypeScript out of the box")),
        Technology::new(Id::TanStackQuery, Zone::Frontend)
            .with_package("@tanstack/react-query")
            .with_description("Async server-state management")
            .with_edge(Edge::new(Id::React18, 95, "React adapter is the primary target"))
            .with_edge(Edge::new(Id::GraphQl, 80, "Can wrap GraphQL fetchers")),
    ]
}

fn agnostic() -> Vec<Technology> {
    vec![
        Technology::new(Id::TypeScript, Zone::Frontend)
            .both()
            .with_dev_package("typescript")
            .with_description("Typed superset of JavaScript")
            .with_edge(Edge::new(Id::React18, 92, "JSX type checking via @types/react"))
            .with_edge(Edge::new(Id::Express, 85, "Needs @types/express for typings"))
            .with_edge(Edge::new(Id::NestJs, 98, "NestJS is written in TypeScript"))
            .with_edge(
                Edge::new(Id::Prisma, 97, "Generated client is fully typed")
                    .with_benefits(&["Autocompleted queries"]),
            )
            .with_edge(Edge::new(Id::Zod, 96, "Schemas infer static types")),
        Technology::new(Id::Zod, Zone::Backend)
            .both()
            .with_package("zod")
            .with_description("Schema validation with static type inference")
            .with_edge(Edge::new(Id::TypeScript, 98, "Designed around TypeScript inference"))
            .with_edge(Edge::new(Id::Express, 88, "Validates request bodies in middleware"))
            .with_edge(Edge::new(Id::NextJs14, 90, "Validates server action input")),
        Technology::new(Id::GraphQl, Zone::Backend)
            .both()
            .with_package("graphql")
            .with_description("Query language for APIs")
            .with_edge(Edge::new(Id::NestJs, 90, "First-party GraphQL module"))
            .with_edge(Edge::new(Id::Express, 84, "Mounted as middleware"))
            .with_edge(Edge::new(Id::Prisma, 86, "Common resolver data layer")),
        Technology::new(Id::Jest, Zone::Frontend)
            .both()
            .with_dev_package("jest")
            .with_description("JavaScript test runner")
            .with_edge(Edge::new(Id::TypeScript, 85, "Needs ts-jest or Babel"))
            .with_edge(
                Edge::new(Id::Vite, 60, "Vitest is usually the better fit")
                    .with_conflicts(&["Separate transform pipeline"]),
            ),
    ]
}

fn backend() -> Vec<Technology> {
    vec![
        Technology::new(Id::NodeJs, Zone::Backend)
            .with_description("JavaScript runtime")
            .with_edge(Edge::new(Id::Express, 98, "Express runs on Node.js"))
            .with_edge(Edge::new(Id::NestJs, 96, "NestJS runs on Node.js"))
            .with_edge(Edge::new(Id::Prisma, 95, "Prisma client targets Node.js"))
            .with_edge(Edge::new(Id::Docker, 92, "Official node images")),
        Technology::new(Id::Express, Zone::Backend)
            .with_package("express")
            .with_description("Minimal web framework for Node.js")
            .with_edge(Edge::new(Id::NodeJs, 98, "Runs on Node.js"))
            .with_edge(Edge::new(Id::TypeScript, 85, "Typings via @types/express"))
            .with_edge(Edge::new(Id::Prisma, 90, "Common ORM choice"))
            .with_edge(Edge::new(Id::PostgreSql, 88, "Through pg or an ORM"))
            .with_edge(Edge::new(Id::MongoDb, 92, "Classic MERN pairing"))
            .with_edge(Edge::new(Id::Redis, 85, "Sessions and caching")),
        Technology::new(Id::NestJs, Zone::Backend)
            .with_package("@nestjs/core")
            .with_description("Opinionated Node.js framework with dependency injection")
            .with_edge(Edge::new(Id::TypeScript, 99, "Written in TypeScript"))
            .with_edge(Edge::new(Id::Prisma, 92, "Documented recipe"))
            .with_edge(Edge::new(Id::PostgreSql, 90, "Through TypeORM or Prisma"))
            .with_edge(
                Edge::new(Id::Express, 95, "Default HTTP adapter")
                    .with_benefits(&["Reuses Express middleware"]),
            ),
        Technology::new(Id::FastApi, Zone::Backend)
            .with_description("Async Python web framework")
            .with_edge(Edge::new(Id::PostgreSql, 92, "SQLAlchemy or SQLModel"))
            .with_edge(Edge::new(Id::Docker, 94, "Uvicorn images"))
            .with_edge(Edge::new(Id::React18, 85, "Common SPA + API pairing"))
            .with_edge(
                Edge::new(Id::Prisma, 40, "Prisma Client Python is community-maintained")
                    .with_conflicts(&["Separate Node.js-based CLI"]),
            ),
        Technology::new(Id::Django, Zone::Backend)
            .with_description("Batteries-included Python web framework")
            .with_edge(Edge::new(Id::PostgreSql, 96, "Best-supported Django database"))
            .with_edge(Edge::new(Id::Redis, 88, "Cache and Celery broker"))
            .with_edge(
                Edge::new(Id::Prisma, 15, "Django ships its own ORM")
                    .with_conflicts(&["Competing migration systems"]),
            ),
        Technology::new(Id::Prisma, Zone::Backend)
            .with_dev_package("prisma")
            .with_description("Type-safe ORM and migration tool")
            .with_edge(
                Edge::new(Id::PostgreSql, 98, "Most complete Prisma connector")
                    .with_benefits(&["Native enums", "JSON columns"]),
            )
            .with_edge(Edge::new(Id::MongoDb, 75, "Supported without migrations"))
            .with_edge(Edge::new(Id::TypeScript, 97, "Generates typed client")),
        Technology::new(Id::PostgreSql, Zone::Backend)
            .with_description("Relational database")
            .with_edge(Edge::new(Id::Docker, 95, "Official postgres image"))
            .with_edge(Edge::new(Id::Redis, 85, "Redis in front as a cache")),
        Technology::new(Id::MongoDb, Zone::Backend)
            .with_package("mongoose")
            .with_description("Document database")
            .with_edge(Edge::new(Id::Express, 92, "Classic MERN pairing"))
            .with_edge(
                Edge::new(Id::PostgreSql, 50, "Two primary datastores")
                    .with_conflicts(&["Split source of truth"]),
            ),
        Technology::new(Id::Redis, Zone::Backend)
            .with_package("ioredis")
            .with_description("In-memory key-value store")
            .with_edge(Edge::new(Id::Docker, 95, "Official redis image")),
        Technology::new(Id::Docker, Zone::Backend)
            .with_description("Container runtime")
            .with_edge(Edge::new(Id::NodeJs, 92, "Official node images"))
            .with_edge(Edge::new(Id::PostgreSql, 95, "docker compose service"))
            .with_edge(Edge::new(Id::Redis, 95, "docker compose service")),
    ]
}
